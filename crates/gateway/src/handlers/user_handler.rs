//! User handlers.
//!
//! Users have no single-record read over HTTP; password hashes never leave
//! the service because every body goes through [`UserResponse`].

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
use domain::{CreateUser, UpdateUser, UserResponse};

use super::{page_request, path_id, ListQuery};
use crate::extractors::ValidatedJson;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user).patch(update_user))
        .route("/delete/:id", patch(delete_user))
}

/// List users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of users", body = [UserResponse]),
        (status = 400, description = "Invalid offset or limit"),
        (status = 404, description = "No users in range")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<ApiResponse<Vec<UserResponse>>, ApiError> {
    let page = page_request(query).with_message("failed to fetch data user")?;
    let users = state
        .services
        .users
        .list(page)
        .await
        .with_message("failed to fetch data user")?;

    let users = users.into_iter().map(UserResponse::from).collect();
    Ok(ApiResponse::ok("success get all user", users))
}

/// Create user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<CreateUser>, AppError>,
) -> Result<ApiResponse<UserResponse>, ApiError> {
    let ValidatedJson(request) = payload.with_message("failed to input data user")?;
    let user = state
        .services
        .users
        .create(request)
        .await
        .with_message("failed to create user")?;

    Ok(ApiResponse::created("success create user", UserResponse::from(user)))
}

/// Partially update a user; an empty password keeps the stored hash
#[utoipa::path(
    patch,
    path = "/api/v1/users",
    tag = "Users",
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email taken or user deactivated")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<UpdateUser>, AppError>,
) -> Result<ApiResponse<()>, ApiError> {
    let ValidatedJson(request) = payload.with_message("failed to input data user")?;
    state
        .services
        .users
        .update(request)
        .await
        .with_message("failed to update user")?;

    Ok(ApiResponse::message("success update user"))
}

/// Deactivate (soft delete) a user
#[utoipa::path(
    patch,
    path = "/api/v1/users/delete/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deactivated"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User already deactivated")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<ApiResponse<()>, ApiError> {
    let id = path_id(path).with_message("failed to delete user")?;
    state
        .services
        .users
        .deactivate(id)
        .await
        .with_message("failed to delete user")?;

    Ok(ApiResponse::message("success delete user"))
}
