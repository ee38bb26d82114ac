//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, ProductId, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation, business rules, and orchestrates
/// repository operations. Validation failures carry the same field details
/// as those rejected by `ValidatedJson`.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_id = input.id))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;

        if self.repository.exists(input.id).await? {
            return Err(ProductError::DuplicateId(input.id));
        }

        self.repository.create(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products ordered by id
    #[instrument(skip(self))]
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.list(filter).await
    }

    /// Partially update an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: ProductId,
        input: UpdateProduct,
    ) -> ProductResult<Product> {
        input.validate()?;

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        if input.is_empty() {
            return Ok(existing);
        }

        self.repository.update(id, input).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn apple() -> Product {
        Product {
            id: 123,
            name: "Apple".to_string(),
            description: "A tasty snack.".to_string(),
            price: 49,
            tax_rate: 700,
        }
    }

    fn create_input(id: ProductId) -> CreateProduct {
        CreateProduct {
            id,
            name: "Orange".to_string(),
            description: "A juicy fruit.".to_string(),
            price: 59,
            tax_rate: 700,
        }
    }

    #[tokio::test]
    async fn test_create_product_checks_duplicates() {
        let mut repo = MockProductRepository::new();
        repo.expect_exists().with(eq(123)).returning(|_| Ok(true));
        repo.expect_create().never();

        let service = ProductService::new(repo);
        let result = service.create_product(create_input(123)).await;

        assert!(matches!(result, Err(ProductError::DuplicateId(123))));
    }

    #[tokio::test]
    async fn test_create_product_stores_new_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_exists().with(eq(789)).returning(|_| Ok(false));
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(repo);
        let product = service.create_product(create_input(789)).await.unwrap();

        assert_eq!(product.id, 789);
        assert_eq!(product.name, "Orange");
    }

    #[tokio::test]
    async fn test_create_product_rejects_invalid_input() {
        let mut repo = MockProductRepository::new();
        repo.expect_exists().never();
        repo.expect_create().never();

        let service = ProductService::new(repo);
        let mut input = create_input(1);
        input.name = String::new();

        let result = service.create_product(input).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().with(eq(42)).returning(|_| Ok(None));

        let service = ProductService::new(repo);
        let result = service.get_product(42).await;

        assert!(matches!(result, Err(ProductError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_update_product_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().with(eq(42)).returning(|_| Ok(None));
        repo.expect_update().never();

        let service = ProductService::new(repo);
        let update = UpdateProduct {
            price: Some(10),
            ..Default::default()
        };

        let result = service.update_product(42, update).await;
        assert!(matches!(result, Err(ProductError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_empty_update_returns_existing_product() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .with(eq(123))
            .returning(|_| Ok(Some(apple())));
        repo.expect_update().never();

        let service = ProductService::new(repo);
        let product = service
            .update_product(123, UpdateProduct::default())
            .await
            .unwrap();

        assert_eq!(product, apple());
    }

    #[tokio::test]
    async fn test_update_product_rejects_negative_price() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().never();

        let service = ProductService::new(repo);
        let update = UpdateProduct {
            price: Some(-5),
            ..Default::default()
        };

        let result = service.update_product(123, update).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_product_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().with(eq(9)).returning(|_| Ok(false));

        let service = ProductService::new(repo);
        let result = service.delete_product(9).await;

        assert!(matches!(result, Err(ProductError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .returning(|_| Err(ProductError::Internal("store unavailable".to_string())));

        let service = ProductService::new(repo);
        let result = service.list_products(ProductFilter::default()).await;

        assert!(matches!(result, Err(ProductError::Internal(_))));
    }
}
