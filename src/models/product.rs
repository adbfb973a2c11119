use serde::Serialize;
use sqlx::FromRow;

/// A catalog entry. Seeded once into an empty store and read-only afterwards.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub price_cents: i64,
  /// Asset name of the product image; the public URL is derived from the
  /// configured object-storage bucket at response time.
  pub image: String,
}
