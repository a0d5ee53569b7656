use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod api;
mod config;

use config::{AppState, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "northwind-http")]
#[command(about = "Northwind tool catalog over plain HTTP + JSON", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "northwind.toml")]
    config: PathBuf,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8082")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "northwind=info,tower_http=debug".into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let args = Args::parse();

    tracing::info!("Starting Northwind HTTP front end");

    // Load configuration
    let config = ServerConfig::load(&args.config)?;
    let backend = config.backend_config()?;
    match &backend.base_url {
        Some(url) => tracing::info!("Backend API: {}", url),
        None => tracing::warn!("NORTHWIND_API is not set; /mcp/run will answer 500"),
    }

    let state = AppState::new(backend)?;
    tracing::info!("Serving {} tools", state.service.catalog().len());

    // Start API server
    let addr = format!("{}:{}", args.host, args.port);
    tracing::info!("Starting API server on {}", addr);

    api::serve(&addr, state).await?;

    Ok(())
}
