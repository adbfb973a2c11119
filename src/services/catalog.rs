//! Catalog store access: product reads, inserts, and one-time seeding.

use crate::errors::{AppError, Result};
use crate::models::Product;
use sqlx::SqlitePool;
use tracing::{info, instrument};

/// The fixed catalog inserted into an empty store: (name, price in cents,
/// image asset name).
const SEED_PRODUCTS: &[(&str, i64, &str)] = &[
  ("Chocolate Fudge Cake", 25_99, "chocolate-fudge-cake.jpg"),
  ("Carrot Cake", 23_99, "carrot-cake.jpg"),
  ("Victoria Sponge", 21_49, "victoria-sponge.jpg"),
  ("Lemon Drizzle Cake", 19_99, "lemon-drizzle-cake.jpg"),
  ("Banana Bread", 12_50, "banana-bread.jpg"),
  ("Sourdough Loaf", 6_75, "sourdough-loaf.jpg"),
  ("Butter Croissant", 3_25, "butter-croissant.jpg"),
];

/// Returns all products, ordered by name for stable catalog display.
#[instrument(name = "catalog::find_all", skip(pool), err(Display))]
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Product>> {
  let products: Vec<Product> =
    sqlx::query_as("SELECT id, name, price_cents, image FROM products ORDER BY name ASC")
      .fetch_all(pool)
      .await?;
  Ok(products)
}

#[instrument(name = "catalog::find_by_id", skip(pool), err(Display))]
pub async fn find_by_id(pool: &SqlitePool, product_id: i64) -> Result<Option<Product>> {
  let product: Option<Product> =
    sqlx::query_as("SELECT id, name, price_cents, image FROM products WHERE id = ?")
      .bind(product_id)
      .fetch_optional(pool)
      .await?;
  Ok(product)
}

/// Number of products currently in the store.
#[instrument(name = "catalog::count", skip(pool), err(Display))]
pub async fn count(pool: &SqlitePool) -> Result<i64> {
  let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
    .fetch_one(pool)
    .await?;
  Ok(count)
}

/// Inserts a single product and returns it with its generated id.
///
/// # Arguments
/// * `name`: display name, must be non-empty.
/// * `price_cents`: unit price in cents, must be non-negative.
/// * `image`: asset name of the product image.
#[instrument(name = "catalog::save", skip(pool), err(Display))]
pub async fn save(pool: &SqlitePool, name: &str, price_cents: i64, image: &str) -> Result<Product> {
  if name.trim().is_empty() {
    return Err(AppError::Validation("Product name cannot be empty.".to_string()));
  }
  if price_cents < 0 {
    return Err(AppError::Validation("Product price cannot be negative.".to_string()));
  }

  let result = sqlx::query("INSERT INTO products (name, price_cents, image) VALUES (?, ?, ?)")
    .bind(name)
    .bind(price_cents)
    .bind(image)
    .execute(pool)
    .await?;

  Ok(Product {
    id: result.last_insert_rowid(),
    name: name.to_string(),
    price_cents,
    image: image.to_string(),
  })
}

/// Seeds the fixed bakery catalog if the store is empty.
///
/// Runs at most once per empty-store lifetime: it is called at startup only,
/// so emptying the catalog while the process runs does not re-trigger it.
#[instrument(name = "catalog::seed_if_empty", skip(pool), err(Display))]
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<usize> {
  if count(pool).await? > 0 {
    info!("Catalog already populated, skipping seed.");
    return Ok(0);
  }

  for (name, price_cents, image) in SEED_PRODUCTS {
    save(pool, name, *price_cents, image).await?;
  }
  info!("Seeded {} catalog products.", SEED_PRODUCTS.len());
  Ok(SEED_PRODUCTS.len())
}
