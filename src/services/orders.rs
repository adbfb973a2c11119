//! Order store access. The one write path inserts an order together with all
//! of its line items in a single transaction.

use crate::errors::Result;
use crate::models::{Order, OrderItem};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, instrument};

/// An order as assembled by the checkout workflow, before it has an identity.
#[derive(Debug, Clone)]
pub struct NewOrder {
  pub name: String,
  pub address: String,
  pub total_cents: i64,
  pub idempotency_key: Option<String>,
  pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
  pub product_name: String,
  pub product_price_cents: i64,
  pub quantity: i64,
}

/// Persists the order and its line items atomically and returns the stored
/// order carrying its generated identifier. Either the order row and every
/// item row are written, or the transaction rolls back and nothing is.
#[instrument(name = "orders::save", skip(pool, new_order), fields(item_count = new_order.items.len()), err(Display))]
pub async fn save(pool: &SqlitePool, new_order: NewOrder) -> Result<Order> {
  let created_at = Utc::now();
  let mut tx = pool.begin().await?;

  let result = sqlx::query(
    "INSERT INTO orders (name, address, total_cents, idempotency_key, created_at)
     VALUES (?, ?, ?, ?, ?)",
  )
  .bind(&new_order.name)
  .bind(&new_order.address)
  .bind(new_order.total_cents)
  .bind(&new_order.idempotency_key)
  .bind(created_at)
  .execute(&mut *tx)
  .await?;
  let order_id = result.last_insert_rowid();

  for item in &new_order.items {
    sqlx::query(
      "INSERT INTO order_items (order_id, product_name, product_price_cents, quantity)
       VALUES (?, ?, ?, ?)",
    )
    .bind(order_id)
    .bind(&item.product_name)
    .bind(item.product_price_cents)
    .bind(item.quantity)
    .execute(&mut *tx)
    .await?;
  }

  tx.commit().await?;
  info!("Persisted order {} with {} items.", order_id, new_order.items.len());

  Ok(Order {
    id: order_id,
    name: new_order.name,
    address: new_order.address,
    total_cents: new_order.total_cents,
    idempotency_key: new_order.idempotency_key,
    created_at,
  })
}

/// Looks up an order by its idempotency token.
#[instrument(name = "orders::find_by_token", skip(pool, token), err(Display))]
pub async fn find_by_token(pool: &SqlitePool, token: &str) -> Result<Option<Order>> {
  let order: Option<Order> = sqlx::query_as(
    "SELECT id, name, address, total_cents, idempotency_key, created_at
     FROM orders WHERE idempotency_key = ?",
  )
  .bind(token)
  .fetch_optional(pool)
  .await?;
  Ok(order)
}

/// Fetches an order and its line items, if the order exists.
#[instrument(name = "orders::find_by_id", skip(pool), err(Display))]
pub async fn find_by_id(pool: &SqlitePool, order_id: i64) -> Result<Option<(Order, Vec<OrderItem>)>> {
  let order: Option<Order> = sqlx::query_as(
    "SELECT id, name, address, total_cents, idempotency_key, created_at
     FROM orders WHERE id = ?",
  )
  .bind(order_id)
  .fetch_optional(pool)
  .await?;

  let Some(order) = order else {
    return Ok(None);
  };

  let items: Vec<OrderItem> = sqlx::query_as(
    "SELECT id, order_id, product_name, product_price_cents, quantity
     FROM order_items WHERE order_id = ? ORDER BY id ASC",
  )
  .bind(order.id)
  .fetch_all(pool)
  .await?;

  Ok(Some((order, items)))
}

/// Number of persisted orders.
#[instrument(name = "orders::count", skip(pool), err(Display))]
pub async fn count(pool: &SqlitePool) -> Result<i64> {
  let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders").fetch_one(pool).await?;
  Ok(count)
}
