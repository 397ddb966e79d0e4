//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure inventory domain logic with no infrastructure
//! dependencies: entities, request types, admission rules and the soft
//! delete lifecycle.

pub mod constants;
pub mod customer;
pub mod error;
pub mod lifecycle;
pub mod pagination;
pub mod password;
pub mod product;
pub mod store;
pub mod user;
pub mod validation;

pub use constants::*;
pub use customer::{CreateCustomer, Customer, UpdateCustomer};
pub use error::{DomainError, DomainResult};
pub use lifecycle::{Deactivation, EntityState, SoftDelete};
pub use pagination::PageRequest;
pub use password::Password;
pub use product::{CreateProduct, Product, UpdateProduct};
pub use store::{CreateStore, Store, UpdateStore};
pub use user::{CreateUser, UpdateUser, User, UserResponse, UserRole};
