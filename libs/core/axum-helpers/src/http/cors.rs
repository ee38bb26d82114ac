use axum::http::{HeaderValue, Method, header};
use core_config::cors::CorsConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates the CORS layer for API services.
///
/// With no configured origins the layer is permissive (any origin, no
/// credentials). Otherwise only the listed origins are allowed, with:
/// - methods GET, POST, PUT, DELETE, OPTIONS
/// - headers Content-Type, Accept
/// - 1 hour max age
///
/// # Errors
/// Returns `InvalidInput` if an origin is not a valid header value.
pub fn create_cors_layer(config: &CorsConfig) -> io::Result<CorsLayer> {
    if config.is_permissive() {
        tracing::warn!("No CORS origins configured, allowing any origin");
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    tracing::info!(
        "CORS configured with allowed origins: {}",
        config.allowed_origins.join(",")
    );

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_when_no_origins() {
        assert!(create_cors_layer(&CorsConfig::permissive()).is_ok());
    }

    #[test]
    fn test_listed_origins_are_accepted() {
        let config = CorsConfig::new(["http://localhost:3000", "https://shop.example.com"]);
        assert!(create_cors_layer(&config).is_ok());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let config = CorsConfig::new(["http://bad\norigin"]);
        let err = create_cors_layer(&config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
