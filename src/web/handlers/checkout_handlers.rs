use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::checkout::{self, CheckoutRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// Accepts a checkout submission and runs the order workflow.
///
/// The request body carries the delivery name and address plus the cart as a
/// serialized snapshot; the workflow owns all validation, so this handler only
/// shapes the confirmation. Customer fields are never logged.
#[instrument(
  name = "handler::place_order",
  skip(app_state, req_payload),
  fields(payload_bytes = req_payload.cart.len())
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CheckoutRequest>,
) -> Result<HttpResponse, AppError> {
  let confirmation = checkout::place_order(&app_state.db_pool, req_payload.into_inner()).await?;

  info!(
    order_id = confirmation.order_id,
    item_count = confirmation.item_count,
    "Checkout completed."
  );

  Ok(HttpResponse::Created().json(json!({
      "message": "Order placed successfully.",
      "orderId": confirmation.order_id,
      "total": confirmation.total,
      "itemCount": confirmation.item_count
  })))
}
