#![allow(dead_code)] // Allow unused helpers in this common test module

use bakeshop::checkout::CheckoutRequest;
use bakeshop::config::AppConfig;
use bakeshop::db;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// The Jane Doe scenario cart: 2x Chocolate Fudge Cake at 25.99 plus
/// 1x Carrot Cake at 23.99, totalling 75.97.
pub const JANE_DOE_CART: &str = r#"[
  {"id": 1, "name": "Chocolate Fudge Cake", "price": 25.99, "quantity": 2},
  {"id": 2, "name": "Carrot Cake", "price": 23.99, "quantity": 1}
]"#;

/// Fresh in-memory database with the schema applied. A single pooled
/// connection keeps every handle on the same in-memory store.
pub async fn test_pool() -> SqlitePool {
  let pool = SqlitePoolOptions::new()
    .min_connections(1)
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("in-memory database should open");
  db::init_schema(&pool).await.expect("schema init should succeed");
  pool
}

pub fn checkout_request(name: &str, address: &str, cart: &str) -> CheckoutRequest {
  CheckoutRequest {
    name: name.to_string(),
    address: address.to_string(),
    cart: cart.to_string(),
    idempotency_key: None,
  }
}

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    database_url: "sqlite::memory:".to_string(),
    assets_bucket: "bakeshop-test".to_string(),
    assets_region: "us-east-1".to_string(),
  }
}

pub async fn order_item_rows(pool: &SqlitePool) -> i64 {
  let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM order_items")
    .fetch_one(pool)
    .await
    .expect("count query should succeed");
  count
}
