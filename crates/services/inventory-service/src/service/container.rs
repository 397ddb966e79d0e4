//! Service Container - centralized access to the four resource services.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    CustomerManager, CustomerService, ProductManager, ProductService, StoreManager, StoreService,
    UserManager, UserService,
};
use crate::repository::{CustomerStore, ProductStore, StoreStore, UserStore};

/// Concrete service container holding one trait object per resource.
#[derive(Clone)]
pub struct Services {
    pub customers: Arc<dyn CustomerService>,
    pub products: Arc<dyn ProductService>,
    pub stores: Arc<dyn StoreService>,
    pub users: Arc<dyn UserService>,
}

impl Services {
    /// Create a service container from already built services
    pub fn new(
        customers: Arc<dyn CustomerService>,
        products: Arc<dyn ProductService>,
        stores: Arc<dyn StoreService>,
        users: Arc<dyn UserService>,
    ) -> Self {
        Self {
            customers,
            products,
            stores,
            users,
        }
    }

    /// Wire SeaORM repositories and managers over one connection pool
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            customers: Arc::new(CustomerManager::new(Arc::new(CustomerStore::new(db.clone())))),
            products: Arc::new(ProductManager::new(Arc::new(ProductStore::new(db.clone())))),
            stores: Arc::new(StoreManager::new(Arc::new(StoreStore::new(db.clone())))),
            users: Arc::new(UserManager::new(Arc::new(UserStore::new(db)))),
        }
    }

    /// Wire the in-memory repositories (tests only)
    #[cfg(any(test, feature = "test-utils"))]
    pub fn in_memory() -> Self {
        use crate::repository::memory::{
            MemoryCustomerRepository, MemoryProductRepository, MemoryStoreRepository,
            MemoryUserRepository,
        };

        Self {
            customers: Arc::new(CustomerManager::new(Arc::new(MemoryCustomerRepository::new()))),
            products: Arc::new(ProductManager::new(Arc::new(MemoryProductRepository::new()))),
            stores: Arc::new(StoreManager::new(Arc::new(MemoryStoreRepository::new()))),
            users: Arc::new(UserManager::new(Arc::new(MemoryUserRepository::new()))),
        }
    }
}
