//! Numeric identifier path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, OriginalUri, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a decimal integer `{id}` path segment.
///
/// A segment that is not made only of ASCII digits (or overflows `i64`) means
/// the item route does not apply, so the request is answered like any other
/// unmatched route: 404 with `No route found for "<METHOD> <path>"`.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match parse_id(&raw) {
            Some(id) => Ok(IdPath(id)),
            None => {
                let path = parts
                    .extensions
                    .get::<OriginalUri>()
                    .map(|uri| uri.path().to_string())
                    .unwrap_or_else(|| parts.uri.path().to_string());

                Err(AppError::route_not_found(&parts.method, path).into_response())
            }
        }
    }
}
