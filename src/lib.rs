//! Bakery storefront service: a product catalog plus a transactional order
//! checkout workflow. The shopping cart itself is owned by the browser and
//! reaches the server only as a per-request snapshot.

pub mod checkout;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
