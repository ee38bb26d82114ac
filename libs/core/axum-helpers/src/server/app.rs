use super::health::health_router;
use super::shutdown::shutdown_signal;
use crate::errors::handlers::route_not_found;
use crate::http::{create_cors_layer, security_headers};
use axum::{Json, Router, middleware, routing::get};
use core_config::{AppInfo, cors::CorsConfig, server::ServerConfig};
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// #[tokio::main]
/// async fn main() -> std::io::Result<()> {
///     create_app(Router::new(), &ServerConfig::default()).await
/// }
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - API routes nested under `/api`
/// - The OpenAPI document at [`OPENAPI_PATH`]
/// - `GET /health` reporting `app_info`
/// - The JSON 404 fallback for unknown paths *and* unsupported methods
/// - Request tracing, security headers, CORS and response compression
///
/// Domain routers are expected to carry their own state already.
///
/// # Errors
/// Returns `InvalidInput` if a configured CORS origin is not a valid header value.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_router;
/// use core_config::{app_info, cors::CorsConfig};
///
/// let api_routes = Router::new().nest("/products", products_router);
/// let router = create_router::<ApiDoc>(api_routes, app_info!(), &CorsConfig::permissive())?;
/// ```
pub fn create_router<T>(apis: Router, app_info: AppInfo, cors: &CorsConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = create_cors_layer(cors)?;

    let router = Router::new()
        .route(OPENAPI_PATH, get(|| async { Json(T::openapi()) }))
        .merge(health_router(app_info))
        .nest("/api", apis)
        .fallback(route_not_found)
        // Must come after every route is registered: it only applies to existing routes
        .method_not_allowed_fallback(route_not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use core_config::app_info;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "Test API"))]
    struct TestDoc;

    fn router() -> Router {
        let apis = Router::new().nest(
            "/widgets",
            Router::new().route("/", get(|| async { Json(json!([])) })),
        );
        create_router::<TestDoc>(apis, app_info!(), &CorsConfig::permissive()).unwrap()
    }

    async fn call(method: &str, uri: &str) -> (StatusCode, Option<String>, Value) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, content_type, body)
    }

    #[tokio::test]
    async fn test_api_routes_are_nested_under_api() {
        let (status, content_type, body) = call("GET", "/api/widgets").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_unknown_path_returns_json_404() {
        let (status, content_type, body) = call("GET", "/api/spaceships").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            json!({
                "type": "NotFoundHttpException",
                "message": "No route found for \"GET /api/spaceships\""
            })
        );
    }

    #[tokio::test]
    async fn test_unsupported_method_returns_json_404() {
        let (status, _, body) = call("DELETE", "/api/widgets").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["message"],
            "No route found for \"DELETE /api/widgets\""
        );
    }

    #[tokio::test]
    async fn test_health_and_openapi_are_mounted() {
        let (status, _, body) = call("GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, _, body) = call("GET", OPENAPI_PATH).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Test API");
    }
}
