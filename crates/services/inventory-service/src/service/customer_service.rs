//! Customer service - customer registration and lifecycle.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    CreateCustomer, Customer, Deactivation, PageRequest, SoftDelete, UpdateCustomer,
    RESOURCE_CUSTOMER,
};

use crate::repository::CustomerRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Page of customers, deactivated ones included. An empty page is `NotFound`.
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Customer>>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Customer>;

    /// Register a new active, non-member customer
    async fn create(&self, request: CreateCustomer) -> AppResult<Customer>;

    /// Partial update of an active customer
    async fn update(&self, request: UpdateCustomer) -> AppResult<()>;

    async fn deactivate(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CustomerService using repository.
pub struct CustomerManager {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerManager {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Customer>> {
        let customers = self.repo.list(page).await?;
        if customers.is_empty() {
            return Err(AppError::not_found("customers"));
        }
        Ok(customers)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Customer> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_CUSTOMER)
    }

    async fn create(&self, request: CreateCustomer) -> AppResult<Customer> {
        request.check_required()?;

        let customer = self
            .repo
            .create(Customer::new(Uuid::now_v7(), request))
            .await?;

        info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    async fn update(&self, request: UpdateCustomer) -> AppResult<()> {
        let current = self.get_by_id(request.id).await?;
        current.ensure_active()?;

        let customer = request.merge_into(&current, Utc::now());
        self.repo.update(customer).await?;

        info!(customer_id = %current.id, "Customer updated");
        Ok(())
    }

    async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        let current = self.get_by_id(id).await?;
        if let Err(e) = current.ensure_can_deactivate() {
            warn!(customer_id = %id, "Customer already deactivated");
            return Err(e.into());
        }

        self.repo.deactivate(id, Deactivation::now()).await?;

        info!(customer_id = %id, "Customer deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCustomerRepository;
    use common::ErrorKind;
    use mockall::predicate::eq;

    fn create_test_customer(id: Uuid) -> Customer {
        Customer {
            id,
            name: "Alice".to_string(),
            phone_number: "0812".to_string(),
            address: "Main St".to_string(),
            is_member: false,
            status: true,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    fn deactivated(mut customer: Customer) -> Customer {
        customer.status = false;
        customer.deleted_at = Some(Utc::now());
        customer
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        // Nothing reaches the repository
        let repo = MockCustomerRepository::new();
        let service = CustomerManager::new(Arc::new(repo));

        let err = service
            .create(CreateCustomer {
                name: String::new(),
                phone_number: "0812".to_string(),
                address: "Main St".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::BadInput);
        assert_eq!(err.to_string(), "name is required");
    }

    #[tokio::test]
    async fn test_create_stores_active_non_member() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_create()
            .withf(|c| c.status && !c.is_member && c.deleted_at.is_none() && c.name == "Alice")
            .times(1)
            .returning(|c| Ok(c));

        let service = CustomerManager::new(Arc::new(repo));
        let customer = service
            .create(CreateCustomer {
                name: "Alice".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(customer.name, "Alice");
        assert!(customer.is_active());
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let id = Uuid::now_v7();
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = CustomerManager::new(Arc::new(repo));
        let err = service.get_by_id(id).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "customer not found");
    }

    #[tokio::test]
    async fn test_empty_list_is_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_list().returning(|_| Ok(vec![]));

        let service = CustomerManager::new(Arc::new(repo));
        let err = service.list(PageRequest::default()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_deactivated_customer_conflicts() {
        let id = Uuid::now_v7();
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(Some(deactivated(create_test_customer(id)))));
        repo.expect_update().never();

        let service = CustomerManager::new(Arc::new(repo));
        let err = service.update(UpdateCustomer::new(id)).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "customer is deactivated");
    }

    #[tokio::test]
    async fn test_update_merges_and_stamps_updated_at() {
        let id = Uuid::now_v7();
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(create_test_customer(id))));
        repo.expect_update()
            .withf(|c| c.name == "Alice" && c.address == "Second St" && c.updated_at.is_some())
            .times(1)
            .returning(|_| Ok(()));

        let service = CustomerManager::new(Arc::new(repo));
        let mut request = UpdateCustomer::new(id);
        request.name = Some(String::new());
        request.address = Some("Second St".to_string());

        service.update(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_deactivate_twice_conflicts() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(deactivated(create_test_customer(id)))));
        repo.expect_deactivate().never();

        let service = CustomerManager::new(Arc::new(repo));
        let err = service.deactivate(Uuid::now_v7()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "customer already deactivated");
    }

    #[tokio::test]
    async fn test_deactivate_missing_customer() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = CustomerManager::new(Arc::new(repo));
        let err = service.deactivate(Uuid::now_v7()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
