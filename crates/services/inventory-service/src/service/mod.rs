//! Service layer - business rules for each inventory resource.

mod container;
mod customer_service;
mod product_service;
mod store_service;
mod user_service;

#[cfg(test)]
mod tests;

pub use container::Services;
pub use customer_service::{CustomerManager, CustomerService};
pub use product_service::{ProductManager, ProductService};
pub use store_service::{StoreManager, StoreService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use customer_service::MockCustomerService;
#[cfg(any(test, feature = "test-utils"))]
pub use product_service::MockProductService;
#[cfg(any(test, feature = "test-utils"))]
pub use store_service::MockStoreService;
#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
