//! Route configuration.

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{customer_routes, health_routes, product_routes, store_routes, user_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Resource routes mounted under `/api/v1`.
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/customers", customer_routes())
        .nest("/products", product_routes())
        .nest("/stores", store_routes())
        .nest("/users", user_routes())
}

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
