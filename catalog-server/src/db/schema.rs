//! Table bootstrap for the `products` table
//!
//! Idempotent; run by `open_pg_store` before the server binds.

use sqlx::PgPool;

const CREATE_PRODUCTS: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL,
        categoria TEXT NOT NULL,
        email_fornecedor TEXT NOT NULL
    )
"#;

/// Create the `products` table if it does not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("ensuring products table exists");
    sqlx::query(CREATE_PRODUCTS).execute(pool).await?;
    Ok(())
}
