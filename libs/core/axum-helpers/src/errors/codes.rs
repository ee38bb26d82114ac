//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - the HTTP status it is answered with
//! - the envelope `type` clients see (e.g., "NotFoundHttpException")
//! - an integer code for logging and monitoring (e.g., 1004)
//! - a default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::RouteNotFound;
//! assert_eq!(code.error_type(), "NotFoundHttpException");
//! assert_eq!(code.code(), 1005);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request validation failed
    ValidationError,

    /// Request body is not valid JSON for the expected shape
    InvalidJson,

    /// Request is malformed (e.g., unreadable body)
    BadRequest,

    /// Requested resource was not found
    NotFound,

    /// No route matches the request method and path
    RouteNotFound,

    /// Request conflicts with current resource state (e.g., duplicate identifier)
    Conflict,

    // Server errors (1100s)
    /// An unexpected internal server error occurred
    InternalError,
}

impl ErrorCode {
    /// Identifier for programmatic handling, in SCREAMING_SNAKE_CASE.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidJson => "INVALID_JSON",
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code used in structured logs (`error_code` field).
    ///
    /// - 1000-1099: client errors
    /// - 1100-1199: server errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidJson => 1002,
            Self::BadRequest => 1003,
            Self::NotFound => 1004,
            Self::RouteNotFound => 1005,
            Self::Conflict => 1008,

            Self::InternalError => 1101,
        }
    }

    /// HTTP status the error is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ValidationError | Self::InvalidJson | Self::BadRequest => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the envelope's `type` member.
    ///
    /// Clients match on these names, so they are stable across releases.
    pub fn error_type(&self) -> &'static str {
        match self.status() {
            StatusCode::BAD_REQUEST => "BadRequestHttpException",
            StatusCode::NOT_FOUND => "NotFoundHttpException",
            StatusCode::CONFLICT => "ConflictHttpException",
            _ => "HttpException",
        }
    }

    /// Default user-facing message, overridden by most call sites.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidJson => "Invalid JSON body",
            Self::BadRequest => "Bad request",
            Self::NotFound => "Resource not found",
            Self::RouteNotFound => "No route found",
            Self::Conflict => "Resource already exists",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
