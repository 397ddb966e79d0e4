//! In-memory repositories for service and HTTP tests.
//!
//! They follow the same contract as the SeaORM stores: lookups include
//! deactivated rows, lists are ordered by insertion, and updates or
//! deactivations of a missing id fail with `NotFound`.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{CustomerRepository, ProductRepository, StoreRepository, UserRepository};
use common::{AppError, AppResult};
use domain::{Customer, Deactivation, PageRequest, Product, SoftDelete, Store, User};

/// A stored row the in-memory table knows how to address and deactivate.
pub trait Row: SoftDelete + Clone + Send + Sync {
    fn id(&self) -> Uuid;

    fn mark_deactivated(&mut self, status: bool, deleted_at: DateTime<Utc>);
}

macro_rules! impl_row {
    ($($entity:ty),+) => {
        $(
            impl Row for $entity {
                fn id(&self) -> Uuid {
                    self.id
                }

                fn mark_deactivated(&mut self, status: bool, deleted_at: DateTime<Utc>) {
                    self.status = status;
                    self.deleted_at = Some(deleted_at);
                }
            }
        )+
    };
}

impl_row!(Customer, Product, Store, User);

/// Vec-backed table guarded by a lock.
pub struct MemoryRepository<T> {
    rows: RwLock<Vec<T>>,
}

pub type MemoryCustomerRepository = MemoryRepository<Customer>;
pub type MemoryProductRepository = MemoryRepository<Product>;
pub type MemoryStoreRepository = MemoryRepository<Store>;
pub type MemoryUserRepository = MemoryRepository<User>;

impl<T: Row> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Row> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Seed the table with existing rows.
    pub fn with_rows(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Snapshot of every stored row.
    pub fn rows(&self) -> Vec<T> {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.rows.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.rows.write().unwrap_or_else(|e| e.into_inner())
    }

    fn page(&self, page: PageRequest) -> Vec<T> {
        self.read()
            .iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect()
    }

    fn find(&self, id: Uuid) -> Option<T> {
        self.read().iter().find(|row| row.id() == id).cloned()
    }

    fn find_where(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.read().iter().find(|row| predicate(row)).cloned()
    }

    fn insert(&self, row: T) -> T {
        self.write().push(row.clone());
        row
    }

    fn replace(&self, row: T, merge: impl FnOnce(&mut T, T)) -> AppResult<()> {
        let mut rows = self.write();
        let stored = rows
            .iter_mut()
            .find(|stored| stored.id() == row.id())
            .ok_or_else(|| AppError::not_found(T::RESOURCE))?;
        merge(stored, row);
        Ok(())
    }

    fn deactivate_row(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()> {
        let mut rows = self.write();
        let stored = rows
            .iter_mut()
            .find(|stored| stored.id() == id)
            .ok_or_else(|| AppError::not_found(T::RESOURCE))?;
        stored.mark_deactivated(deactivation.status(), deactivation.deleted_at());
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for MemoryRepository<Customer> {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Customer>> {
        Ok(self.page(page))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        Ok(self.find(id))
    }

    async fn create(&self, customer: Customer) -> AppResult<Customer> {
        Ok(self.insert(customer))
    }

    async fn update(&self, customer: Customer) -> AppResult<()> {
        self.replace(customer, |stored, new| {
            stored.name = new.name;
            stored.phone_number = new.phone_number;
            stored.address = new.address;
            stored.updated_at = new.updated_at;
        })
    }

    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()> {
        self.deactivate_row(id, deactivation)
    }
}

#[async_trait]
impl ProductRepository for MemoryRepository<Product> {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Product>> {
        Ok(self.page(page))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.find(id))
    }

    async fn find_by_sku(&self, sku: &str) -> AppResult<Option<Product>> {
        Ok(self.find_where(|p| p.sku == sku))
    }

    async fn create(&self, product: Product) -> AppResult<Product> {
        Ok(self.insert(product))
    }

    async fn update(&self, product: Product) -> AppResult<()> {
        self.replace(product, |stored, new| {
            stored.sku = new.sku;
            stored.product_type = new.product_type;
            stored.name = new.name;
            stored.brand = new.brand;
            stored.sugar_level = new.sugar_level;
            stored.production_year = new.production_year;
            stored.distributor = new.distributor;
            stored.updated_at = new.updated_at;
        })
    }

    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()> {
        self.deactivate_row(id, deactivation)
    }
}

#[async_trait]
impl StoreRepository for MemoryRepository<Store> {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Store>> {
        Ok(self.page(page))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Store>> {
        Ok(self.find(id))
    }

    async fn create(&self, store: Store) -> AppResult<Store> {
        Ok(self.insert(store))
    }

    async fn update(&self, store: Store) -> AppResult<()> {
        self.replace(store, |stored, new| {
            stored.name = new.name;
            stored.address = new.address;
            stored.updated_at = new.updated_at;
        })
    }

    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()> {
        self.deactivate_row(id, deactivation)
    }
}

#[async_trait]
impl UserRepository for MemoryRepository<User> {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<User>> {
        Ok(self.page(page))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.find(id))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.find_where(|u| u.email == email))
    }

    async fn create(&self, user: User) -> AppResult<User> {
        Ok(self.insert(user))
    }

    async fn update(&self, user: User) -> AppResult<()> {
        self.replace(user, |stored, new| {
            stored.name = new.name;
            stored.email = new.email;
            stored.password_hash = new.password_hash;
            stored.role = new.role;
            stored.updated_at = new.updated_at;
        })
    }

    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()> {
        self.deactivate_row(id, deactivation)
    }
}
