//! Custom extractors for Axum handlers.
//!
//! Rejections are converted to [`AppError`](crate::AppError) responses so
//! clients always receive the JSON error envelope.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
