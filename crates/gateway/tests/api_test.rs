//! Integration tests for API endpoints.
//!
//! The real router runs over in-memory repositories, so no PostgreSQL is
//! needed.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use common::AppError;
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;
use inventory_service_lib::service::{MockProductService, Services};

// =============================================================================
// Helpers
// =============================================================================

fn server_with(services: Services) -> TestServer {
    TestServer::new(create_router(AppState::new(services))).unwrap()
}

fn server() -> TestServer {
    server_with(Services::in_memory())
}

async fn create_product(server: &TestServer, sku: &str) -> Value {
    let response = server
        .post("/api/v1/products")
        .json(&json!({ "sku": sku, "name": "Cola", "type": "drink", "sugar_level": 10 }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

// =============================================================================
// Envelopes
// =============================================================================

#[tokio::test]
async fn test_create_returns_created_envelope() {
    let server = server();

    let body = create_product(&server, "A1").await;

    assert_eq!(body["status_code"], 201);
    assert_eq!(body["message"], "success create data product");
    assert_eq!(body["data"]["sku"], "A1");
    assert_eq!(body["data"]["type"], "drink");
    assert_eq!(body["data"]["status"], true);
}

#[tokio::test]
async fn test_get_by_id_round_trips() {
    let server = server();
    let created = create_product(&server, "A1").await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = server.get(&format!("/api/v1/products/{}", id)).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "success get data product");
    assert_eq!(body["data"]["id"], id);
}

#[tokio::test]
async fn test_update_returns_null_data() {
    let server = server();
    let created = create_product(&server, "A1").await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = server
        .patch("/api/v1/products")
        .json(&json!({ "id": id, "brand": "Fizz" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "success update data product");
    assert!(body["data"].is_null());
}

// =============================================================================
// Error mapping
// =============================================================================

#[tokio::test]
async fn test_duplicate_sku_is_conflict() {
    let server = server();
    create_product(&server, "A1").await;

    let response = server
        .post("/api/v1/products")
        .json(&json!({ "sku": "A1", "name": "Other" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert_eq!(body["status_code"], 409);
    assert_eq!(body["message"], "failed to create product");
    assert_eq!(body["error"], "sku A1 already registered");
}

#[tokio::test]
async fn test_missing_required_field_is_bad_request() {
    let server = server();

    let response = server
        .post("/api/v1/stores")
        .json(&json!({ "name": "Candy Hub" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "failed to create store");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = server();

    let response = server
        .post("/api/v1/customers")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "failed to input data customer");
}

#[tokio::test]
async fn test_invalid_path_id_is_bad_request() {
    let server = server();

    let response = server.get("/api/v1/stores/not-a-uuid").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "failed to fetch store");
    assert_eq!(body["error"], "id is invalid");
}

#[tokio::test]
async fn test_negative_offset_is_bad_request() {
    let server = server();

    let response = server
        .get("/api/v1/customers")
        .add_query_param("offset", -1)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "invalid offset or limit");
}

#[tokio::test]
async fn test_non_numeric_limit_is_bad_request() {
    let server = server();

    let response = server
        .get("/api/v1/products")
        .add_query_param("limit", "ten")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "invalid offset or limit");
}

#[tokio::test]
async fn test_blank_offset_and_limit_use_defaults() {
    let server = server();
    create_product(&server, "A1").await;

    let response = server
        .get("/api/v1/products")
        .add_query_param("offset", "")
        .add_query_param("limit", "")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"][0]["sku"], "A1");
}

#[tokio::test]
async fn test_empty_list_is_not_found() {
    let server = server();

    let response = server.get("/api/v1/stores").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "failed to fetch stores");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let mut products = MockProductService::new();
    products
        .expect_list()
        .returning(|_| Err(AppError::internal("connection reset by peer")));

    let mut services = Services::in_memory();
    services.products = Arc::new(products);
    let server = server_with(services);

    let response = server.get("/api/v1/products").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "failed to fetch data products");
    assert_eq!(body["error"], "an internal error occurred");
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn test_deactivated_customer_cannot_be_updated() {
    let server = server();
    let created = server
        .post("/api/v1/customers")
        .json(&json!({ "name": "Alice", "phone_number": "0812" }))
        .await
        .json::<Value>();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    server
        .patch(&format!("/api/v1/customers/deactive/{}", id))
        .await
        .assert_status_ok();

    let fetched = server
        .get(&format!("/api/v1/customers/{}", id))
        .await
        .json::<Value>();
    assert_eq!(fetched["data"]["status"], false);
    assert!(fetched["data"]["deleted_at"].is_string());

    let response = server
        .patch("/api/v1/customers")
        .json(&json!({ "id": id, "name": "Bob" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["error"], "customer is deactivated");

    let response = server
        .patch(&format!("/api/v1/customers/deactive/{}", id))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_pages_products() {
    let server = server();
    for sku in ["A1", "A2", "A3"] {
        create_product(&server, sku).await;
    }

    let response = server
        .get("/api/v1/products")
        .add_query_param("offset", 1)
        .add_query_param("limit", 1)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "success get data all product");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["sku"], "A2");
}

#[tokio::test]
async fn test_user_password_never_returned() {
    let server = server();

    let response = server
        .post("/api/v1/users")
        .json(&json!({
            "name": "Budi",
            "email": "budi@example.com",
            "password": "secret123"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["data"]["role"], "staff");
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("password_hash").is_none());

    let listed = server.get("/api/v1/users").await.json::<Value>();
    assert_eq!(listed["message"], "success get all user");
    assert!(listed["data"][0].get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let server = server();
    let user = json!({ "name": "Budi", "email": "budi@example.com", "password": "secret123" });

    server.post("/api/v1/users").json(&user).await.assert_status(StatusCode::CREATED);
    let response = server.post("/api/v1/users").json(&user).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["message"], "failed to create user");
}

#[tokio::test]
async fn test_invalid_email_is_bad_request() {
    let server = server();

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "name": "Budi", "email": "not-an-email", "password": "secret123" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "failed to input data user");
}

#[tokio::test]
async fn test_health_without_database() {
    let server = server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "not configured");
}
