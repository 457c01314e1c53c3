//! HTTP server command for the product API
//!
//! Connects to PostgreSQL (or uses the in-memory store with `--memory`),
//! bootstraps the `products` table, and serves until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use catalog_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use catalog_server::db::{open_pg_store, MemoryProductStore, PoolSettings, ProductStore};
use catalog_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Database URL (overrides environment / .env)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum connections in the database pool
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Serve from an in-process store instead of PostgreSQL (data is not persisted)
    ///
    /// Takes precedence over --database-url.
    #[arg(long)]
    pub memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn ProductStore> = if args.memory {
        tracing::warn!("Using in-memory store; products are lost on shutdown");
        Arc::new(MemoryProductStore::new())
    } else {
        let database_url = args
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env (or pass --memory)")?;

        let settings = PoolSettings::new(database_url).max_connections(args.max_connections);
        let store = open_pg_store(&settings)
            .await
            .context("Failed to open product database")?;

        Arc::new(store)
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.timeout),
    };

    tracing::info!("Starting catalog server on {}", args.bind);

    // Blocks until shutdown
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
