use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: i64,
  /// Customer delivery name, as submitted at checkout.
  pub name: String,
  pub address: String,
  /// Derived at checkout time as the sum over the line items; never
  /// re-computed afterwards.
  pub total_cents: i64,
  /// Client-generated token used to deduplicate resubmissions, if any.
  pub idempotency_key: Option<String>,
  pub created_at: DateTime<Utc>,
}
