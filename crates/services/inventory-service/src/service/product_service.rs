//! Product service - catalogue entries keyed by a unique SKU.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    validation::ensure_unique, CreateProduct, Deactivation, PageRequest, Product, SoftDelete,
    UpdateProduct, RESOURCE_PRODUCT,
};

use crate::repository::ProductRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Product>>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<Product>;

    /// Create a product; the SKU must not be registered yet
    async fn create(&self, request: CreateProduct) -> AppResult<Product>;

    async fn update(&self, request: UpdateProduct) -> AppResult<()>;

    async fn deactivate(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ProductService using repository.
pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
}

impl ProductManager {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Reject `sku` when another product already holds it.
    async fn ensure_sku_available(&self, sku: &str, updating: Option<Uuid>) -> AppResult<()> {
        let holder = self.repo.find_by_sku(sku).await?.map(|p| p.id);
        if let Err(e) = ensure_unique("sku", sku, holder, updating) {
            warn!(sku = %sku, "SKU already registered");
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn list(&self, page: PageRequest) -> AppResult<Vec<Product>> {
        let products = self.repo.list(page).await?;
        if products.is_empty() {
            return Err(AppError::not_found("products"));
        }
        Ok(products)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Product> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found(RESOURCE_PRODUCT)
    }

    async fn create(&self, request: CreateProduct) -> AppResult<Product> {
        request.check_required()?;
        self.ensure_sku_available(&request.sku, None).await?;

        let product = self
            .repo
            .create(Product::new(Uuid::now_v7(), request))
            .await?;

        info!(product_id = %product.id, sku = %product.sku, "Product created");
        Ok(product)
    }

    async fn update(&self, request: UpdateProduct) -> AppResult<()> {
        let current = self.get_by_id(request.id).await?;
        current.ensure_active()?;

        if let Some(sku) = request.sku() {
            self.ensure_sku_available(sku, Some(current.id)).await?;
        }

        let product = request.merge_into(&current, Utc::now());
        self.repo.update(product).await?;

        info!(product_id = %current.id, "Product updated");
        Ok(())
    }

    async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        let current = self.get_by_id(id).await?;
        if let Err(e) = current.ensure_can_deactivate() {
            warn!(product_id = %id, "Product already deactivated");
            return Err(e.into());
        }

        self.repo.deactivate(id, Deactivation::now()).await?;

        info!(product_id = %id, "Product deactivated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use common::ErrorKind;
    use mockall::predicate::eq;

    fn create_test_product(id: Uuid, sku: &str) -> Product {
        Product {
            id,
            sku: sku.to_string(),
            product_type: "soda".to_string(),
            name: "Cola".to_string(),
            brand: "Fizz".to_string(),
            sugar_level: 5,
            production_year: "2024".to_string(),
            distributor: "PT Maju".to_string(),
            status: true,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    fn cola_request() -> CreateProduct {
        CreateProduct {
            sku: "A1".to_string(),
            product_type: "soda".to_string(),
            name: "Cola".to_string(),
            sugar_level: 5,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_duplicate_sku_conflicts() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_sku()
            .with(eq("A1"))
            .returning(|sku| Ok(Some(create_test_product(Uuid::now_v7(), sku))));
        repo.expect_create().never();

        let service = ProductManager::new(Arc::new(repo));
        let err = service.create(cola_request()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "sku A1 already registered");
    }

    #[tokio::test]
    async fn test_create_sku_lookup_failure_propagates() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_sku()
            .returning(|_| Err(AppError::internal("connection refused")));
        repo.expect_create().never();

        let service = ProductManager::new(Arc::new(repo));
        let err = service.create(cola_request()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_status() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_sku().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|p| p.status && p.sku == "A1" && p.id.get_version_num() == 7)
            .times(1)
            .returning(|p| Ok(p));

        let service = ProductManager::new(Arc::new(repo));
        let product = service.create(cola_request()).await.unwrap();

        assert_eq!(product.sku, "A1");
        assert!(product.is_active());
    }

    #[tokio::test]
    async fn test_update_with_own_sku_succeeds() {
        let id = Uuid::now_v7();
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(create_test_product(id, "A1"))));
        repo.expect_find_by_sku()
            .returning(move |sku| Ok(Some(create_test_product(id, sku))));
        repo.expect_update().times(1).returning(|_| Ok(()));

        let service = ProductManager::new(Arc::new(repo));
        let mut request = UpdateProduct::new(id);
        request.sku = Some("A1".to_string());
        request.name = Some("Cola Zero".to_string());

        service.update(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_sku_taken_by_other_product() {
        let id = Uuid::now_v7();
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(create_test_product(id, "A1"))));
        repo.expect_find_by_sku()
            .returning(|sku| Ok(Some(create_test_product(Uuid::now_v7(), sku))));
        repo.expect_update().never();

        let service = ProductManager::new(Arc::new(repo));
        let mut request = UpdateProduct::new(id);
        request.sku = Some("B2".to_string());

        let err = service.update(request).await.unwrap_err();
        assert_eq!(err.to_string(), "sku B2 already registered");
    }

    #[tokio::test]
    async fn test_update_without_sku_skips_lookup() {
        let id = Uuid::now_v7();
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(create_test_product(id, "A1"))));
        repo.expect_find_by_sku().never();
        repo.expect_update()
            .withf(|p| p.sku == "A1" && p.sugar_level == 5 && p.brand == "Pop")
            .times(1)
            .returning(|_| Ok(()));

        let service = ProductManager::new(Arc::new(repo));
        let mut request = UpdateProduct::new(id);
        request.sku = Some(String::new());
        request.sugar_level = Some(0);
        request.brand = Some("Pop".to_string());

        service.update(request).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ProductManager::new(Arc::new(repo));
        let err = service
            .update(UpdateProduct::new(Uuid::now_v7()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "product not found");
    }
}
