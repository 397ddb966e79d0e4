//! Store handlers.

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
use domain::{CreateStore, Store, UpdateStore};

use super::{page_request, path_id, ListQuery};
use crate::extractors::ValidatedJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Create store routes
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stores).post(create_store).patch(update_store))
        .route("/:id", get(get_store))
        .route("/delete/:id", patch(delete_store))
}

/// List stores
#[utoipa::path(
    get,
    path = "/api/v1/stores",
    tag = "Stores",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of stores", body = [Store]),
        (status = 400, description = "Invalid offset or limit"),
        (status = 404, description = "No stores in range")
    )
)]
pub async fn list_stores(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<Store>>, ApiError> {
    let page = page_request(query).with_message("failed to fetch stores")?;
    let stores = state
        .services
        .stores
        .list(page)
        .await
        .with_message("failed to fetch stores")?;

    Ok(ApiResponse::ok("success get data stores", stores))
}

/// Get store by ID
#[utoipa::path(
    get,
    path = "/api/v1/stores/{id}",
    tag = "Stores",
    params(("id" = Uuid, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store", body = Store),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Store not found")
    )
)]
pub async fn get_store(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<ApiResponse<Store>, ApiError> {
    let id = path_id(path).with_message("failed to fetch store")?;
    let store = state
        .services
        .stores
        .get_by_id(id)
        .await
        .with_message("failed to fetch store")?;

    Ok(ApiResponse::ok("success get store", store))
}

/// Create store
#[utoipa::path(
    post,
    path = "/api/v1/stores",
    tag = "Stores",
    request_body = CreateStore,
    responses(
        (status = 201, description = "Store created", body = Store),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_store(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<CreateStore>, AppError>,
) -> Result<ApiResponse<Store>, ApiError> {
    let ValidatedJson(request) = payload.with_message("failed to input data store")?;
    let store = state
        .services
        .stores
        .create(request)
        .await
        .with_message("failed to create store")?;

    Ok(ApiResponse::created("success create store", store))
}

/// Partially update a store
#[utoipa::path(
    patch,
    path = "/api/v1/stores",
    tag = "Stores",
    request_body = UpdateStore,
    responses(
        (status = 200, description = "Store updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Store not found"),
        (status = 409, description = "Store deactivated")
    )
)]
pub async fn update_store(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<UpdateStore>, AppError>,
) -> Result<ApiResponse<()>, ApiError> {
    let ValidatedJson(request) = payload.with_message("failed to input data store")?;
    state
        .services
        .stores
        .update(request)
        .await
        .with_message("failed to update store")?;

    Ok(ApiResponse::message("success update data store"))
}

/// Deactivate (soft delete) a store
#[utoipa::path(
    patch,
    path = "/api/v1/stores/delete/{id}",
    tag = "Stores",
    params(("id" = Uuid, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store deactivated"),
        (status = 404, description = "Store not found"),
        (status = 409, description = "Store already deactivated")
    )
)]
pub async fn delete_store(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<ApiResponse<()>, ApiError> {
    let id = path_id(path).with_message("failed to delete store")?;
    state
        .services
        .stores
        .deactivate(id)
        .await
        .with_message("failed to delete store")?;

    Ok(ApiResponse::message("success delete data store"))
}
