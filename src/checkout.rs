//! The order checkout workflow.
//!
//! A checkout request carries the delivery details plus the client-owned cart
//! as a serialized snapshot (JSON text encoding a sequence of lines). The
//! workflow runs a fixed sequence of steps: deserialize the snapshot, validate
//! the required fields and every line, compute the total, then persist the
//! order and its items in one transaction. Any step failing before the write
//! leaves the store untouched. The client clears its own cart after a
//! successful response; the server holds no cart state.

use crate::errors::{AppError, Result};
use crate::models::CartLine;
use crate::services::orders::{self, NewOrder, NewOrderItem};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{info, instrument};

/// The checkout submission boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
  /// Customer delivery name.
  pub name: String,
  pub address: String,
  /// Cart snapshot: JSON text encoding a sequence of
  /// `{id, name, price, quantity}` records.
  pub cart: String,
  /// Optional client-generated token; resubmitting with the same token
  /// returns the original order instead of creating a duplicate.
  pub idempotency_key: Option<String>,
}

/// Confirmation returned to the caller after a successful checkout.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutConfirmation {
  pub order_id: i64,
  /// Order total formatted as decimal currency, e.g. `"75.97"`.
  pub total: String,
  pub item_count: usize,
}

/// Runs the checkout workflow end to end.
///
/// # Errors
/// * `Validation` for a malformed snapshot, blank name/address, an empty
///   cart, a non-positive quantity, or an invalid price — nothing persisted.
/// * `Sqlx` if the atomic write fails — the transaction rolls back and the
///   caller sees a server fault.
#[instrument(
  name = "checkout::place_order",
  skip(pool, request),
  fields(payload_bytes = request.cart.len(), has_token = request.idempotency_key.is_some())
)]
pub async fn place_order(pool: &SqlitePool, request: CheckoutRequest) -> Result<CheckoutConfirmation> {
  let lines = parse_cart_snapshot(&request.cart)?;
  validate_delivery_fields(&request)?;
  let items = validate_lines(&lines)?;
  let total_cents = compute_total_cents(&items)?;

  // Deliberately log shape only, never the customer's name or address.
  info!(
    line_count = items.len(),
    total_cents, "Checkout snapshot validated."
  );

  // Replay detection: a resubmitted token short-circuits to the original
  // order without writing anything.
  if let Some(token) = request.idempotency_key.as_deref() {
    if let Some((order, existing_items)) = find_existing(pool, token).await? {
      info!(order_id = order.id, "Duplicate checkout token, returning original order.");
      return Ok(CheckoutConfirmation {
        order_id: order.id,
        total: format_cents(order.total_cents),
        item_count: existing_items,
      });
    }
  }

  let item_count = items.len();
  let order = orders::save(
    pool,
    NewOrder {
      name: request.name,
      address: request.address,
      total_cents,
      idempotency_key: request.idempotency_key,
      items,
    },
  )
  .await?;

  Ok(CheckoutConfirmation {
    order_id: order.id,
    total: format_cents(order.total_cents),
    item_count,
  })
}

/// Step 1: deserialize the snapshot. A snapshot that is not a well-formed
/// sequence of lines is a client fault; no persistence is attempted.
fn parse_cart_snapshot(raw: &str) -> Result<Vec<CartLine>> {
  serde_json::from_str::<Vec<CartLine>>(raw).map_err(|e| {
    // The payload is untrusted; log its size, not its contents.
    tracing::warn!(payload_bytes = raw.len(), error = %e, "Rejected malformed cart snapshot.");
    AppError::Validation("Cart snapshot is not a valid sequence of line items.".to_string())
  })
}

/// Step 2: required delivery fields must be non-empty.
fn validate_delivery_fields(request: &CheckoutRequest) -> Result<()> {
  if request.name.trim().is_empty() {
    return Err(AppError::Validation("Delivery name is required.".to_string()));
  }
  if request.address.trim().is_empty() {
    return Err(AppError::Validation("Delivery address is required.".to_string()));
  }
  Ok(())
}

/// Step 3: check every line and convert the submitted decimal prices to
/// integer cents. An empty cart is rejected here; the client blocks it too,
/// but the server re-enforces it.
fn validate_lines(lines: &[CartLine]) -> Result<Vec<NewOrderItem>> {
  if lines.is_empty() {
    return Err(AppError::Validation("Cart is empty.".to_string()));
  }
  lines
    .iter()
    .map(|line| {
      if line.name.trim().is_empty() {
        return Err(AppError::Validation("Cart line is missing a product name.".to_string()));
      }
      if line.quantity < 1 {
        return Err(AppError::Validation(format!(
          "Quantity for '{}' must be at least 1.",
          line.name
        )));
      }
      Ok(NewOrderItem {
        product_name: line.name.clone(),
        product_price_cents: price_to_cents(line.price)?,
        quantity: line.quantity,
      })
    })
    .collect()
}

/// Step 4: total over the client-submitted prices. There is no cross-check
/// against the catalog; the snapshot is the priced source for this order.
fn compute_total_cents(items: &[NewOrderItem]) -> Result<i64> {
  items.iter().try_fold(0_i64, |acc, item| {
    item
      .product_price_cents
      .checked_mul(item.quantity)
      .and_then(|line_total| acc.checked_add(line_total))
      .ok_or_else(|| AppError::Validation("Cart total is out of range.".to_string()))
  })
}

/// Converts a submitted decimal price to cents, rounding at two decimal
/// places of currency.
fn price_to_cents(price: f64) -> Result<i64> {
  if !price.is_finite() || price < 0.0 || price > 1e12 {
    return Err(AppError::Validation("Line price must be a non-negative amount.".to_string()));
  }
  Ok((price * 100.0).round() as i64)
}

/// Formats integer cents as decimal currency.
pub fn format_cents(cents: i64) -> String {
  format!("{}.{:02}", cents / 100, cents % 100)
}

async fn find_existing(pool: &SqlitePool, token: &str) -> Result<Option<(crate::models::Order, usize)>> {
  match orders::find_by_token(pool, token).await? {
    Some(order) => {
      let item_count = orders::find_by_id(pool, order.id)
        .await?
        .map(|(_, items)| items.len())
        .unwrap_or(0);
      Ok(Some((order, item_count)))
    }
    None => Ok(None),
  }
}
