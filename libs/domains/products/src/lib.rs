//! Products Domain
//!
//! This module provides a complete domain implementation for managing a
//! product catalogue kept in memory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     fixtures::default_products,
//!     handlers,
//!     InMemoryProductRepository,
//!     ProductService,
//! };
//!
//! // Create a repository seeded with the sample catalogue and a service
//! let repository = InMemoryProductRepository::with_products(default_products());
//! let service = ProductService::new(repository);
//!
//! // Create Axum router, to be nested under `/api/products`
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, ProductFilter, ProductId, UpdateProduct, MAX_TAX_RATE};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
