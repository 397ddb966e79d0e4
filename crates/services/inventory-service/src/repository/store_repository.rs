//! Store repository implementation with soft delete support.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait, Unchanged,
};
use uuid::Uuid;

use super::entities::store::{self, ActiveModel, Entity as StoreEntity};
use super::{ensure_affected, update_error};
use common::AppResult;
use domain::{Deactivation, PageRequest, Store, RESOURCE_STORE};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Store>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Store>>;

    async fn create(&self, store: Store) -> AppResult<Store>;

    async fn update(&self, store: Store) -> AppResult<()>;

    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()>;
}

/// Concrete implementation of StoreRepository
pub struct StoreStore {
    db: DatabaseConnection,
}

impl StoreStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreRepository for StoreStore {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Store>> {
        let models = StoreEntity::find()
            .order_by_asc(store::Column::CreatedAt)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Store::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Store>> {
        let result = StoreEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Store::from))
    }

    async fn create(&self, store: Store) -> AppResult<Store> {
        let txn = self.db.begin().await?;

        let model = ActiveModel::from(store).insert(&txn).await?;
        txn.commit().await?;

        Ok(Store::from(model))
    }

    async fn update(&self, store: Store) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let active = ActiveModel {
            id: Unchanged(store.id),
            name: Set(store.name),
            address: Set(store.address),
            updated_at: Set(store.updated_at),
            ..Default::default()
        };
        active
            .update(&txn)
            .await
            .map_err(|e| update_error(RESOURCE_STORE, e))?;

        txn.commit().await?;
        Ok(())
    }

    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let result = StoreEntity::update_many()
            .set(ActiveModel {
                status: Set(deactivation.status()),
                deleted_at: Set(Some(deactivation.deleted_at())),
                ..Default::default()
            })
            .filter(store::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        ensure_affected(RESOURCE_STORE, result.rows_affected)?;

        txn.commit().await?;
        Ok(())
    }
}
