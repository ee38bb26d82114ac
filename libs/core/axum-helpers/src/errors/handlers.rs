use axum::{
    extract::OriginalUri,
    http::Method,
    response::{IntoResponse, Response},
};

use super::AppError;

/// Fallback for requests no route matches.
///
/// Installed both as the router fallback (unknown path) and as the
/// method-not-allowed fallback (known path, unsupported verb), so every
/// unmatched request gets the same 404 envelope. The reported path is the
/// original request path, even when the fallback runs inside a nested router.
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    AppError::route_not_found(method, uri.path()).into_response()
}
