use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

/// Immutable application configuration, built once at startup and passed
/// explicitly into the components that need it. Nothing below re-reads the
/// process environment after this is constructed.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  // Object storage hosting the product images. The server never uploads
  // anything; these only shape the public URLs embedded in catalog responses.
  pub assets_bucket: String,
  pub assets_region: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    // `mode=rwc` lets a fresh deployment create its database file.
    let database_url = get_env("DATABASE_URL").unwrap_or_else(|_| "sqlite:bakeshop.db?mode=rwc".to_string());

    let assets_bucket = get_env("ASSETS_BUCKET").unwrap_or_else(|_| "bakeshop-assets".to_string());
    let assets_region = get_env("ASSETS_REGION").unwrap_or_else(|_| "us-east-1".to_string());

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      assets_bucket,
      assets_region,
    })
  }

  /// Public URL for a product image asset name.
  pub fn image_url(&self, asset: &str) -> String {
    format!(
      "https://{}.s3.{}.amazonaws.com/{}",
      self.assets_bucket, self.assets_region, asset
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  const VARS: &[&str] = &[
    "SERVER_HOST",
    "SERVER_PORT",
    "DATABASE_URL",
    "ASSETS_BUCKET",
    "ASSETS_REGION",
  ];

  fn clear_env() {
    for var in VARS {
      env::remove_var(var);
    }
  }

  #[test]
  #[serial]
  fn from_env_falls_back_to_defaults() {
    clear_env();
    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.server_host, "127.0.0.1");
    assert_eq!(cfg.server_port, 8080);
    assert_eq!(cfg.database_url, "sqlite:bakeshop.db?mode=rwc");
    assert_eq!(cfg.assets_bucket, "bakeshop-assets");
    assert_eq!(cfg.assets_region, "us-east-1");
  }

  #[test]
  #[serial]
  fn from_env_honours_overrides() {
    clear_env();
    env::set_var("SERVER_PORT", "9090");
    env::set_var("DATABASE_URL", "sqlite:/tmp/shopfront.db");
    env::set_var("ASSETS_REGION", "eu-west-2");
    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.server_port, 9090);
    assert_eq!(cfg.database_url, "sqlite:/tmp/shopfront.db");
    assert_eq!(cfg.assets_region, "eu-west-2");
    clear_env();
  }

  #[test]
  #[serial]
  fn invalid_port_is_a_config_error() {
    clear_env();
    env::set_var("SERVER_PORT", "not-a-port");
    let result = AppConfig::from_env();
    assert!(matches!(result, Err(AppError::Config(_))));
    clear_env();
  }

  #[test]
  fn image_url_uses_bucket_and_region() {
    let cfg = AppConfig {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      database_url: "sqlite::memory:".to_string(),
      assets_bucket: "cakes".to_string(),
      assets_region: "eu-west-2".to_string(),
    };
    assert_eq!(
      cfg.image_url("carrot-cake.jpg"),
      "https://cakes.s3.eu-west-2.amazonaws.com/carrot-cake.jpg"
    );
  }
}
