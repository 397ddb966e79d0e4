//! Customer repository implementation with soft delete support.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait, Unchanged,
};
use uuid::Uuid;

use super::entities::customer::{self, ActiveModel, Entity as CustomerEntity};
use super::{ensure_affected, update_error};
use common::AppResult;
use domain::{Customer, Deactivation, PageRequest, RESOURCE_CUSTOMER};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
///
/// Lookups include deactivated rows; callers decide what to do with them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Page of customers ordered by creation time
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Customer>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>>;

    /// Insert a new customer and return the stored row
    async fn create(&self, customer: Customer) -> AppResult<Customer>;

    /// Write the editable fields and `updated_at` of an existing customer
    async fn update(&self, customer: Customer) -> AppResult<()>;

    /// Stamp `deleted_at` and clear `status`
    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()>;
}

/// Concrete implementation of CustomerRepository
pub struct CustomerStore {
    db: DatabaseConnection,
}

impl CustomerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Customer>> {
        let models = CustomerEntity::find()
            .order_by_asc(customer::Column::CreatedAt)
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let result = CustomerEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Customer::from))
    }

    async fn create(&self, customer: Customer) -> AppResult<Customer> {
        let txn = self.db.begin().await?;

        let model = ActiveModel::from(customer).insert(&txn).await?;
        txn.commit().await?;

        Ok(Customer::from(model))
    }

    async fn update(&self, customer: Customer) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let active = ActiveModel {
            id: Unchanged(customer.id),
            name: Set(customer.name),
            phone_number: Set(customer.phone_number),
            address: Set(customer.address),
            updated_at: Set(customer.updated_at),
            ..Default::default()
        };
        active
            .update(&txn)
            .await
            .map_err(|e| update_error(RESOURCE_CUSTOMER, e))?;

        txn.commit().await?;
        Ok(())
    }

    async fn deactivate(&self, id: Uuid, deactivation: Deactivation) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let result = CustomerEntity::update_many()
            .set(ActiveModel {
                status: Set(deactivation.status()),
                deleted_at: Set(Some(deactivation.deleted_at())),
                ..Default::default()
            })
            .filter(customer::Column::Id.eq(id))
            .exec(&txn)
            .await?;

        ensure_affected(RESOURCE_CUSTOMER, result.rows_affected)?;

        txn.commit().await?;
        Ok(())
    }
}
