mod common;

use common::*;

use actix_web::{test, web as actix_data, App};
use bakeshop::services::catalog;
use bakeshop::state::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

async fn test_state() -> AppState {
  AppState {
    db_pool: test_pool().await,
    config: Arc::new(test_config()),
  }
}

macro_rules! test_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(actix_data::Data::new($state.clone()))
        .configure(bakeshop::web::configure_app_routes),
    )
    .await
  };
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
  let state = test_state().await;
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/api/v1/health").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn catalog_endpoints_serve_seeded_products_with_image_urls() {
  let state = test_state().await;
  catalog::seed_if_empty(&state.db_pool).await.unwrap();
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/api/v1/products").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  let products = body["products"].as_array().expect("products array");
  assert!(!products.is_empty());

  let first = &products[0];
  let image_url = first["image_url"].as_str().unwrap();
  assert!(image_url.starts_with("https://bakeshop-test.s3.us-east-1.amazonaws.com/"));

  let product_id = first["id"].as_i64().unwrap();
  let req = test::TestRequest::get()
    .uri(&format!("/api/v1/products/{}", product_id))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["product"]["id"], json!(product_id));
}

#[tokio::test]
async fn unknown_product_is_a_404() {
  let state = test_state().await;
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/api/v1/products/9999").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn checkout_round_trip_returns_confirmation_and_order_lookup_works() {
  let state = test_state().await;
  let app = test_app!(state);

  let req = test::TestRequest::post()
    .uri("/api/v1/checkout")
    .set_json(json!({
      "name": "Jane Doe",
      "address": "1 Main St",
      "cart": JANE_DOE_CART,
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 201);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["total"], "75.97");
  assert_eq!(body["itemCount"], 2);
  let order_id = body["orderId"].as_i64().expect("orderId");

  let req = test::TestRequest::get()
    .uri(&format!("/api/v1/orders/{}", order_id))
    .to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["total"], "75.97");
  assert_eq!(body["items"].as_array().unwrap().len(), 2);
  assert_eq!(body["items"][0]["productName"], "Chocolate Fudge Cake");
  assert_eq!(body["items"][0]["quantity"], 2);
}

#[tokio::test]
async fn malformed_cart_snapshot_is_a_400() {
  let state = test_state().await;
  let app = test_app!(state);

  let req = test::TestRequest::post()
    .uri("/api/v1/checkout")
    .set_json(json!({
      "name": "Jane Doe",
      "address": "1 Main St",
      "cart": "{not a sequence}",
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn blank_delivery_name_is_a_400() {
  let state = test_state().await;
  let app = test_app!(state);

  let req = test::TestRequest::post()
    .uri("/api/v1/checkout")
    .set_json(json!({
      "name": "",
      "address": "1 Main St",
      "cart": JANE_DOE_CART,
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn unknown_order_is_a_404() {
  let state = test_state().await;
  let app = test_app!(state);

  let req = test::TestRequest::get().uri("/api/v1/orders/424242").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 404);
}
