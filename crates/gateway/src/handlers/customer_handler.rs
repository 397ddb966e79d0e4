//! Customer handlers.

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
use domain::{CreateCustomer, Customer, UpdateCustomer};

use super::{page_request, path_id, ListQuery};
use crate::extractors::ValidatedJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Create customer routes
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_customers)
                .post(create_customer)
                .patch(update_customer),
        )
        .route("/:id", get(get_customer))
        .route("/deactive/:id", patch(deactivate_customer))
}

/// List customers
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "Customers",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of customers", body = [Customer]),
        (status = 400, description = "Invalid offset or limit"),
        (status = 404, description = "No customers in range")
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<Customer>>, ApiError> {
    let page = page_request(query).with_message("failed to fetch customers")?;
    let customers = state
        .services
        .customers
        .list(page)
        .await
        .with_message("failed to fetch customers")?;

    Ok(ApiResponse::ok("success get data customers", customers))
}

/// Get customer by ID
#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer", body = Customer),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<ApiResponse<Customer>, ApiError> {
    let id = path_id(path).with_message("failed to fetch customer")?;
    let customer = state
        .services
        .customers
        .get_by_id(id)
        .await
        .with_message("failed to fetch customer")?;

    Ok(ApiResponse::ok("success get data customer", customer))
}

/// Create customer
#[utoipa::path(
    post,
    path = "/api/v1/customers",
    tag = "Customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<CreateCustomer>, AppError>,
) -> Result<ApiResponse<Customer>, ApiError> {
    let ValidatedJson(request) = payload.with_message("failed to input data customer")?;
    let customer = state
        .services
        .customers
        .create(request)
        .await
        .with_message("failed to create customer")?;

    Ok(ApiResponse::created("success create customer", customer))
}

/// Partially update a customer
#[utoipa::path(
    patch,
    path = "/api/v1/customers",
    tag = "Customers",
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Customer deactivated")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<UpdateCustomer>, AppError>,
) -> Result<ApiResponse<()>, ApiError> {
    let ValidatedJson(request) = payload.with_message("failed to input data customer")?;
    state
        .services
        .customers
        .update(request)
        .await
        .with_message("failed to update customer")?;

    Ok(ApiResponse::message("success update data customer"))
}

/// Deactivate a customer
#[utoipa::path(
    patch,
    path = "/api/v1/customers/deactive/{id}",
    tag = "Customers",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deactivated"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Customer already deactivated")
    )
)]
pub async fn deactivate_customer(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<ApiResponse<()>, ApiError> {
    let id = path_id(path).with_message("failed to deactive customer")?;
    state
        .services
        .customers
        .deactivate(id)
        .await
        .with_message("failed to deactive customer")?;

    Ok(ApiResponse::message("success deactive customer"))
}
