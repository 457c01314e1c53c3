//! catalog CLI - product catalog HTTP service
//!
//! Entry point for the `catalog` binary. Loads `.env`, sets up tracing,
//! and dispatches subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "catalog",
    author,
    version,
    about = "Product catalog HTTP service (create, list, read, update, delete)"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces via OpenTelemetry OTLP (requires `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the product HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; DATABASE_URL may come from the real environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
