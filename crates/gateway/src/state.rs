//! Application state for dependency injection.

use inventory_service_lib::infra::Database;
use inventory_service_lib::service::Services;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Present when running against PostgreSQL; used by the health check
    pub database: Option<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(services: Services) -> Self {
        Self {
            services,
            database: None,
        }
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }
}
