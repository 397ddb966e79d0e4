//! API Gateway Library
//!
//! HTTP REST API over the inventory services, which run in-process.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use inventory_service_lib::config::InventoryServiceConfig;
use inventory_service_lib::infra::Database;
use inventory_service_lib::service::Services;

use crate::routes::create_router;
use crate::state::AppState;

pub use inventory_service_lib::{run_migrations, MigrateAction};

/// Connect to PostgreSQL, apply pending migrations and serve HTTP.
pub async fn run_server(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = InventoryServiceConfig::from_env();
    let database = Database::connect(&config.database).await?;

    let services = Services::from_connection(database.get_connection());
    let state = AppState::new(services).with_database(database);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
