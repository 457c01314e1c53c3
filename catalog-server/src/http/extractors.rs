//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{ProductId, ValidationError};

/// Extract and validate a product id from the path
pub struct ProductIdPath(pub ProductId);

impl<S> FromRequestParts<S> for ProductIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "product id" }))?;

        match raw.parse() {
            Ok(id) => Ok(Self(id)),
            // No row can carry an id the column cannot hold
            Err(ValidationError::OutOfRange { .. }) => Err(ApiError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}
