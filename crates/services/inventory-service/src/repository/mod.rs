//! Repository layer for data access.
//!
//! Every write runs in its own transaction. Reads return `Ok(None)` (or an
//! empty list) when no row matches; any other database failure surfaces as
//! `AppError::Database`.

pub mod entities;
mod customer_repository;
mod product_repository;
mod store_repository;
mod user_repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

use common::{AppError, AppResult};
use sea_orm::{DbErr, SqlErr};

pub use customer_repository::{CustomerRepository, CustomerStore};
pub use product_repository::{ProductRepository, ProductStore};
pub use store_repository::{StoreRepository, StoreStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use store_repository::MockStoreRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

/// Map a failed single-row UPDATE: no matching row is `NotFound`.
fn update_error(resource: &str, err: DbErr) -> AppError {
    match err {
        DbErr::RecordNotUpdated => AppError::not_found(resource),
        other => AppError::from(other),
    }
}

/// Map a failed write that may have hit a unique index.
fn unique_error(err: DbErr, conflict: impl FnOnce() -> String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(conflict()),
        _ => AppError::from(err),
    }
}

/// A bulk UPDATE that touched no row means the id does not exist.
fn ensure_affected(resource: &str, rows_affected: u64) -> AppResult<()> {
    if rows_affected == 0 {
        return Err(AppError::not_found(resource));
    }
    Ok(())
}
