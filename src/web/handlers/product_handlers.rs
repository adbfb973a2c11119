use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::checkout::format_cents;
use crate::errors::AppError;
use crate::models::Product;
use crate::services::catalog;
use crate::state::AppState;

/// Catalog entry as served to clients: price formatted as currency and the
/// image resolved to its public object-storage URL.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
  pub id: i64,
  pub name: String,
  pub price: String,
  pub image_url: String,
}

impl CatalogEntry {
  fn from_product(product: Product, app_state: &AppState) -> Self {
    CatalogEntry {
      id: product.id,
      name: product.name,
      price: format_cents(product.price_cents),
      image_url: app_state.config.image_url(&product.image),
    }
  }
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = catalog::find_all(&app_state.db_pool).await?;
  info!("Successfully fetched {} products.", products.len());

  let entries: Vec<CatalogEntry> = products
    .into_iter()
    .map(|p| CatalogEntry::from_product(p, app_state.get_ref()))
    .collect();

  Ok(HttpResponse::Ok().json(json!({
      "message": "Products fetched successfully.",
      "products": entries
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match catalog::find_by_id(&app_state.db_pool, product_id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(json!({
        "message": "Product fetched successfully.",
        "product": CatalogEntry::from_product(product, app_state.get_ref())
    }))),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}
