use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{instrument, warn};

use crate::checkout::format_cents;
use crate::errors::AppError;
use crate::services::orders;
use crate::state::AppState;

/// Confirmation lookup: the order with its line items.
#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();

  match orders::find_by_id(&app_state.db_pool, order_id).await? {
    Some((order, items)) => {
      let item_views: Vec<_> = items
        .iter()
        .map(|item| {
          json!({
            "productName": item.product_name,
            "productPrice": format_cents(item.product_price_cents),
            "quantity": item.quantity,
          })
        })
        .collect();
      Ok(HttpResponse::Ok().json(json!({
          "message": "Order fetched successfully.",
          "orderId": order.id,
          "total": format_cents(order.total_cents),
          "createdAt": order.created_at,
          "items": item_views
      })))
    }
    None => {
      warn!("Order with ID {} not found.", order_id);
      Err(AppError::NotFound(format!("Order with ID {} not found.", order_id)))
    }
  }
}
