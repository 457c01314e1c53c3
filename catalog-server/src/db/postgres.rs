//! PostgreSQL product store
//!
//! Every operation is a single statement:
//! - create: INSERT ... RETURNING (id assigned by SERIAL)
//! - delete: DELETE ... RETURNING (no prior lookup)
//! - update: UPDATE with COALESCE per column, so NULL binds keep the old value;
//!   an empty patch is a plain lookup

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{DbError, ProductStore};
use crate::models::{NewProduct, Product, ProductId, ProductPatch};

const COLUMNS: &str = "id, name, description, price, categoria, email_fornecedor";

/// Product store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, DbError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn get_products(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(&format!("SELECT {COLUMNS} FROM products"))
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn create_product(&self, new: NewProduct) -> Result<Product, DbError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (name, description, price, categoria, email_fornecedor)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(&new.category)
        .bind(&new.supplier_email)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = %product.id, "product inserted");
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<Option<Product>, DbError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "DELETE FROM products WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, DbError> {
        // Nothing to write; skip the UPDATE and its row lock
        if patch.is_empty() {
            return self.get_product(id).await;
        }

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                categoria = COALESCE($5, categoria),
                email_fornecedor = COALESCE($6, email_fornecedor)
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.price)
        .bind(patch.category)
        .bind(patch.supplier_email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{open_pg_store, PoolSettings};

    // Run with: DATABASE_URL=postgres://... cargo test -p catalog-server -- --ignored

    async fn store() -> PgProductStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        open_pg_store(&PoolSettings::new(url))
            .await
            .expect("store open failed")
    }

    fn gadget() -> NewProduct {
        NewProduct {
            name: "Gadget".into(),
            description: "pg test row".into(),
            price: 3.25,
            category: "testing".into(),
            supplier_email: "pg@example.com".into(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_get_delete_roundtrip() {
        let store = store().await;

        let created = store.create_product(gadget()).await.unwrap();
        let fetched = store.get_product(created.id).await.unwrap();
        assert_eq!(fetched.as_ref(), Some(&created));

        let deleted = store.delete_product(created.id).await.unwrap();
        assert_eq!(deleted, Some(created.clone()));
        assert!(store.get_product(created.id).await.unwrap().is_none());
        assert!(store.delete_product(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_keeps_absent_columns() {
        let store = store().await;
        let created = store.create_product(gadget()).await.unwrap();

        let patch = ProductPatch {
            price: Some(4.5),
            ..Default::default()
        };
        let updated = store
            .update_product(created.id, patch)
            .await
            .unwrap()
            .expect("row exists");

        assert_eq!(updated.price, 4.5);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.supplier_email, created.supplier_email);

        store.delete_product(created.id).await.unwrap();
    }
}
