use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, ProductId, UpdateProduct};

/// Repository trait for Product persistence
///
/// Handlers and services only see this trait, so the store can be swapped
/// (or mocked) without touching the HTTP layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product; fails with `DuplicateId` if the id is taken
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: ProductId) -> ProductResult<Option<Product>>;

    /// List products ordered by id, paged by the filter
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Merge an update into an existing product
    async fn update(&self, id: ProductId, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether it existed
    async fn delete(&self, id: ProductId) -> ProductResult<bool>;

    /// Check if a product id is taken
    async fn exists(&self, id: ProductId) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository
///
/// Clones share the same underlying map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `products`. A later product replaces an
    /// earlier one with the same id.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut map = BTreeMap::new();
        for product in products {
            if let Some(previous) = map.insert(product.id, product) {
                tracing::warn!(product_id = previous.id, "Seed product id listed twice, keeping the last one");
            }
        }

        Self {
            products: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if products.contains_key(&input.id) {
            return Err(ProductError::DuplicateId(input.id));
        }

        let product = Product::new(input);
        products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let page = products
            .values()
            .skip(filter.offset)
            .take(filter.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(page)
    }

    async fn update(&self, id: ProductId, input: UpdateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.apply_update(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists(&self, id: ProductId) -> ProductResult<bool> {
        let products = self.products.read().await;
        Ok(products.contains_key(&id))
    }
}
