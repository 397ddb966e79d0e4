//! Product handlers.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, patch},
    Router,
};
use uuid::Uuid;

use common::{ApiError, AppError, ResultExt};
use domain::{CreateProduct, Product, UpdateProduct};

use super::{page_request, path_id, ListQuery};
use crate::extractors::ValidatedJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_products).post(create_product).patch(update_product),
        )
        .route("/:id", get(get_product))
        .route("/delete/:id", patch(delete_product))
}

/// List products
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of products", body = [Product]),
        (status = 400, description = "Invalid offset or limit"),
        (status = 404, description = "No products in range")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<Product>>, ApiError> {
    let page = page_request(query).with_message("failed to fetch data products")?;
    let products = state
        .services
        .products
        .list(page)
        .await
        .with_message("failed to fetch data products")?;

    Ok(ApiResponse::ok("success get data all product", products))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<ApiResponse<Product>, ApiError> {
    let id = path_id(path).with_message("failed to fetch product")?;
    let product = state
        .services
        .products
        .get_by_id(id)
        .await
        .with_message("failed to fetch product")?;

    Ok(ApiResponse::ok("success get data product", product))
}

/// Create product
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Validation error"),
        (status = 409, description = "SKU already registered")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<CreateProduct>, AppError>,
) -> Result<ApiResponse<Product>, ApiError> {
    let ValidatedJson(request) = payload.with_message("failed to input data product")?;
    let product = state
        .services
        .products
        .create(request)
        .await
        .with_message("failed to create product")?;

    Ok(ApiResponse::created("success create data product", product))
}

/// Partially update a product; the target id travels in the body
#[utoipa::path(
    patch,
    path = "/api/v1/products",
    tag = "Products",
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "SKU taken or product deactivated")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<UpdateProduct>, AppError>,
) -> Result<ApiResponse<()>, ApiError> {
    let ValidatedJson(request) = payload.with_message("failed to input data product")?;
    state
        .services
        .products
        .update(request)
        .await
        .with_message("failed to update product")?;

    Ok(ApiResponse::message("success update data product"))
}

/// Deactivate (soft delete) a product
#[utoipa::path(
    patch,
    path = "/api/v1/products/delete/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deactivated"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product already deactivated")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<ApiResponse<()>, ApiError> {
    let id = path_id(path).with_message("failed to delete product")?;
    state
        .services
        .products
        .deactivate(id)
        .await
        .with_message("failed to delete product")?;

    Ok(ApiResponse::message("success delete data product"))
}
