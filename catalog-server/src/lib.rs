//! catalog-server: HTTP server for the product catalog
//!
//! Exposes create/read/update/delete over a single `products` table.
//! Handlers talk to a [`db::ProductStore`], backed by PostgreSQL in
//! production and by an in-process map for tests and `--memory` mode.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryProductStore, PgProductStore, ProductStore};
pub use http::{build_router, run_server, ServerConfig};
