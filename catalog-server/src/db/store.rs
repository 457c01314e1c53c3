//! Product store trait and database error type

use async_trait::async_trait;
use sqlx::error::ErrorKind;

use crate::models::{NewProduct, Product, ProductId, ProductPatch};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// Unique, check, not-null or foreign-key violation
    #[error("constraint violation: {message}")]
    Constraint { message: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if !matches!(db.kind(), ErrorKind::Other) {
                return Self::Constraint {
                    message: db.message().to_owned(),
                };
            }
        }
        Self::Sqlx(e)
    }
}

/// Storage for products (testable).
///
/// Lookups by id return `Ok(None)` when no row matches; only store failures
/// are errors.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, DbError>;

    /// All rows; order is store-defined.
    async fn get_products(&self) -> Result<Vec<Product>, DbError>;

    async fn create_product(&self, new: NewProduct) -> Result<Product, DbError>;

    /// Remove a row, returning its last state, or `None` if it did not exist.
    async fn delete_product(&self, id: ProductId) -> Result<Option<Product>, DbError>;

    /// Overwrite the fields present in `patch`, or return `None` without
    /// side effects if the row does not exist.
    async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, DbError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_stay_sqlx() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Sqlx(_)));
    }

    #[test]
    fn constraint_display() {
        let err = DbError::Constraint {
            message: "duplicate key".into(),
        };
        assert_eq!(err.to_string(), "constraint violation: duplicate key");
    }
}
