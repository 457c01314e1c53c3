//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": ..., "detail": ...}` JSON bodies with
//! appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// Detail message for missing products
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Bad path or body input (400)
    Validation(ValidationError),

    /// Product id has no row (404)
    NotFound,

    /// Store rejected the write on a constraint (409)
    Conflict { message: String },

    /// Any other store failure (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "detail": e.to_string()
                }),
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "detail": PRODUCT_NOT_FOUND
                }),
            ),
            Self::Conflict { message } => {
                tracing::warn!("Constraint violation: {}", message);
                (
                    StatusCode::CONFLICT,
                    json!({
                        "error": "conflict",
                        "detail": message
                    }),
                )
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "detail": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Constraint { message } => Self::Conflict { message },
            _ => Self::Database(e),
        }
    }
}
