//! Domain models for the product catalog
//!
//! Wire names follow the `products` table columns (`categoria`,
//! `email_fornecedor`); Rust field names are English.

pub mod product;
pub mod validation;

pub use product::{NewProduct, Product, ProductId, ProductPatch};
pub use validation::ValidationError;
