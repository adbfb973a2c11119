//! Database pool construction and idempotent schema setup.

use crate::errors::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Opens the connection pool, creating the database file on first run.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
  let options = SqliteConnectOptions::from_str(database_url)?
    .create_if_missing(true)
    .foreign_keys(true);
  let pool = SqlitePoolOptions::new().connect_with(options).await?;
  Ok(pool)
}

/// Creates the tables if they do not exist yet. Safe to run on every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
  sqlx::query(
    "CREATE TABLE IF NOT EXISTS products (
       id          INTEGER PRIMARY KEY AUTOINCREMENT,
       name        TEXT    NOT NULL,
       price_cents INTEGER NOT NULL CHECK (price_cents >= 0),
       image       TEXT    NOT NULL
     )",
  )
  .execute(pool)
  .await?;

  sqlx::query(
    "CREATE TABLE IF NOT EXISTS orders (
       id              INTEGER PRIMARY KEY AUTOINCREMENT,
       name            TEXT    NOT NULL,
       address         TEXT    NOT NULL,
       total_cents     INTEGER NOT NULL CHECK (total_cents >= 0),
       idempotency_key TEXT,
       created_at      TEXT    NOT NULL
     )",
  )
  .execute(pool)
  .await?;

  // Partial unique index: requests without a key keep inserting freely.
  sqlx::query(
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_orders_idempotency_key
     ON orders (idempotency_key) WHERE idempotency_key IS NOT NULL",
  )
  .execute(pool)
  .await?;

  sqlx::query(
    "CREATE TABLE IF NOT EXISTS order_items (
       id                  INTEGER PRIMARY KEY AUTOINCREMENT,
       order_id            INTEGER NOT NULL REFERENCES orders (id) ON DELETE CASCADE,
       product_name        TEXT    NOT NULL,
       product_price_cents INTEGER NOT NULL CHECK (product_price_cents >= 0),
       quantity            INTEGER NOT NULL CHECK (quantity >= 1)
     )",
  )
  .execute(pool)
  .await?;

  tracing::info!("Database schema is in place.");
  Ok(())
}
