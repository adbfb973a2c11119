use serde::Serialize;
use sqlx::FromRow;

/// One line of a persisted order. `product_name` and `product_price_cents` are
/// copied from the cart line rather than referencing the catalog, so the order
/// keeps its historical name and price even if the catalog later changes.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
  pub id: i64,
  pub order_id: i64,
  pub product_name: String,
  pub product_price_cents: i64,
  pub quantity: i64,
}
