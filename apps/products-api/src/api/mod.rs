//! API routes module

pub mod products;

use axum::Router;
use domain_products::ProductRepository;

/// Create all API routes, relative to the `/api` prefix
pub fn routes<R: ProductRepository + 'static>(repository: R) -> Router {
    Router::new().nest("/products", products::router(repository))
}
