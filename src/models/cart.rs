use serde::Deserialize;

/// One line of the client-owned cart snapshot, as submitted at checkout.
///
/// The cart lives entirely in the browser; the server only ever sees it as
/// this per-request snapshot and never persists it as an entity. The price is
/// the client's claim in decimal currency and is converted to integer cents
/// during validation.
#[derive(Debug, Clone, Deserialize)]
pub struct CartLine {
  /// Product id as displayed to the client. Not checked against the catalog.
  pub id: i64,
  pub name: String,
  pub price: f64,
  pub quantity: i64,
}
