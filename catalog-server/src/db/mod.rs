//! Database layer - store trait, connection pool, and implementations
//!
//! # Design Principles
//!
//! - One statement per operation, so each call commits exactly once
//! - Absence is `Ok(None)`, never an error
//! - Rely on DB constraints; violations surface as `DbError::Constraint`

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod store;

pub use memory::MemoryProductStore;
pub use pool::{open_pg_store, PoolSettings};
pub use postgres::PgProductStore;
pub use store::{DbError, ProductStore};
