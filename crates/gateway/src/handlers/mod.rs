//! HTTP handlers, one module per resource.

pub mod customer_handler;
pub mod health_handler;
pub mod product_handler;
pub mod store_handler;
pub mod user_handler;

pub use customer_handler::customer_routes;
pub use health_handler::health_routes;
pub use product_handler::product_routes;
pub use store_handler::store_routes;
pub use user_handler::user_routes;

use std::str::FromStr;

use axum::extract::{
    rejection::{PathRejection, QueryRejection},
    Path, Query,
};
use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::PageRequest;

/// Deserialize empty strings as None for optional numeric fields.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Pagination query for list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Rows to skip (default 0)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub offset: Option<i64>,
    /// Page size; 0 or missing uses the default, capped at 100
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<i64>,
}

/// Turn the raw list query into a bounded page.
pub(crate) fn page_request(query: Result<Query<ListQuery>, QueryRejection>) -> AppResult<PageRequest> {
    let Query(query) = query.map_err(|_| AppError::bad_request("invalid offset or limit"))?;
    Ok(PageRequest::new(
        query.offset.unwrap_or(0),
        query.limit.unwrap_or(0),
    )?)
}

/// Parse the `:id` path segment.
pub(crate) fn path_id(path: Result<Path<Uuid>, PathRejection>) -> AppResult<Uuid> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::bad_request("id is invalid"))
}
