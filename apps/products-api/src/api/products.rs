//! Products API routes

use axum::Router;
use domain_products::{
    fixtures::default_products, handlers, CreateProduct, InMemoryProductRepository, Product,
    ProductRepository, ProductService,
};
use eyre::WrapErr;
use std::fs;
use std::path::Path;
use tracing::info;
use validator::Validate;

use crate::config::SeedConfig;

/// Create products router
pub fn router<R: ProductRepository + 'static>(repository: R) -> Router {
    let service = ProductService::new(repository);
    handlers::router(service)
}

/// Build the store the server starts with
pub fn repository(seed: &SeedConfig) -> eyre::Result<InMemoryProductRepository> {
    if !seed.enabled {
        info!("Seeding disabled, starting with an empty product store");
        return Ok(InMemoryProductRepository::new());
    }

    let products = match &seed.fixtures_path {
        Some(path) => load_fixtures(path)?,
        None => default_products(),
    };

    info!(count = products.len(), "Seeding product store");
    Ok(InMemoryProductRepository::with_products(products))
}

/// Read a JSON array of products, validated like a create request
fn load_fixtures(path: &Path) -> eyre::Result<Vec<Product>> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read product fixtures from {}", path.display()))?;

    let inputs: Vec<CreateProduct> = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("Invalid product fixtures in {}", path.display()))?;

    inputs
        .into_iter()
        .map(|input| -> eyre::Result<Product> {
            input
                .validate()
                .wrap_err_with(|| format!("Invalid fixture product {}", input.id))?;
            Ok(Product::new(input))
        })
        .collect()
}
