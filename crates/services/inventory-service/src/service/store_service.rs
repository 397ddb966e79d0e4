//! Store service.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    CreateStore, Deactivation, PageRequest, SoftDelete, Store, UpdateStore, RESOURCE_STORE,
};

use crate::repository::StoreRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StoreService: Send + Sync {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Store>>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Store>;

    async fn create(&self, request: CreateStore) -> AppResult<Store>;

    async fn update(&self, request: UpdateStore) -> AppResult<()>;

    async fn deactivate(&self, id: Uuid) -> AppResult<()>;
}

pub struct StoreManager {
    repo: Arc<dyn StoreRepository>,
}

impl StoreManager {
    pub fn new(repo: Arc<dyn StoreRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl StoreService for StoreManager {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Store>> {
        let stores = self.repo.list(page).await?;
        if stores.is_empty() {
            return Err(AppError::not_found("stores"));
        }
        Ok(stores)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Store> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_STORE)
    }

    async fn create(&self, request: CreateStore) -> AppResult<Store> {
        request.check_required()?;

        let store = self.repo.create(Store::new(Uuid::now_v7(), request)).await?;

        info!(store_id = %store.id, "Store created");
        Ok(store)
    }

    async fn update(&self, request: UpdateStore) -> AppResult<()> {
        let current = self.get_by_id(request.id).await?;
        current.ensure_active()?;

        let store = request.merge_into(&current, Utc::now());
        self.repo.update(store).await?;

        info!(store_id = %current.id, "Store updated");
        Ok(())
    }

    async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        let current = self.get_by_id(id).await?;
        if let Err(e) = current.ensure_can_deactivate() {
            warn!(store_id = %id, "Store already deactivated");
            return Err(e.into());
        }

        self.repo.deactivate(id, Deactivation::now()).await?;

        info!(store_id = %id, "Store deactivated");
        Ok(())
    }
}
