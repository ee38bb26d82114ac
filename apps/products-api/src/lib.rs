//! Products API - REST server wiring
//!
//! The binary in `main.rs` and the end-to-end tests both assemble the
//! application through [`app`], so they exercise the same router.

pub mod api;
pub mod config;
pub mod openapi;

use axum::Router;
use domain_products::ProductRepository;
use std::io;

use config::Config;

/// Build the full application router around `repository`
///
/// Product routes live under `/api/products`; `/health`, the OpenAPI
/// document and the JSON not-found fallback come from `axum_helpers`.
pub fn app<R: ProductRepository + 'static>(repository: R, config: &Config) -> io::Result<Router> {
    let api_routes = api::routes(repository);
    axum_helpers::create_router::<openapi::ApiDoc>(api_routes, config.app, &config.cors)
}
