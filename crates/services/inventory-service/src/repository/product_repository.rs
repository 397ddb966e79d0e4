//! Product repository implementation with soft delete support.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait, Unchanged,
};
use uuid::Uuid;

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use super::{ensure_affected, unique_error, update_error};
use common::AppResult;
use domain::{Deactivation, PageRequest, Product, RESOURCE_PRODUCT};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Product>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Find product by SKU, deactivated products included
    async fn find_by_sku(&self, sku: &str) -> AppResult<Option<Product>>;

    async fn create(&self, product: Product) -> AppResult<Product>;

    async fn update(&self, product: Product) -> AppResult<()>;

    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn sku_taken(sku: &str) -> impl FnOnce() -> String + '_ {
    move || format!("sku {} already registered", sku)
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::CreatedAt)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Product::from))
    }

    async fn find_by_sku(&self, sku: &str) -> AppResult<Option<Product>> {
        let result = ProductEntity::find()
            .filter(product::Column::Sku.eq(sku))
            .one(&self.db)
            .await?;

        Ok(result.map(Product::from))
    }

    async fn create(&self, product: Product) -> AppResult<Product> {
        let sku = product.sku.clone();
        let txn = self.db.begin().await?;

        // The unique index still guards against a concurrent insert of the same SKU
        let model = ActiveModel::from(product)
            .insert(&txn)
            .await
            .map_err(|e| unique_error(e, sku_taken(&sku)))?;
        txn.commit().await?;

        Ok(Product::from(model))
    }

    async fn update(&self, product: Product) -> AppResult<()> {
        let sku = product.sku.clone();
        let txn = self.db.begin().await?;

        let active = ActiveModel {
            id: Unchanged(product.id),
            sku: Set(product.sku),
            product_type: Set(product.product_type),
            name: Set(product.name),
            brand: Set(product.brand),
            sugar_level: Set(product.sugar_level),
            production_year: Set(product.production_year),
            distributor: Set(product.distributor),
            updated_at: Set(product.updated_at),
            ..Default::default()
        };
        active.update(&txn).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => update_error(RESOURCE_PRODUCT, e),
            other => unique_error(other, sku_taken(&sku)),
        })?;

        txn.commit().await?;
        Ok(())
    }

    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let result = ProductEntity::update_many()
            .set(ActiveModel {
                status: Set(deactivation.status()),
                deleted_at: Set(Some(deactivation.deleted_at())),
                ..Default::default()
            })
            .filter(product::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        ensure_affected(RESOURCE_PRODUCT, result.rows_affected)?;

        txn.commit().await?;
        Ok(())
    }
}
