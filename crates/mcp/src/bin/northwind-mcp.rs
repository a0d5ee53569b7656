// Standalone MCP server binary (stdio transport)

use anyhow::{Context, Result};
use northwind_core::{BackendConfig, NorthwindService, ToolCatalog};
use northwind_mcp::server::McpServer;
use northwind_mcp::tools::catalog_registry;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing. Stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!("Northwind MCP server starting...");

    let config = BackendConfig::from_env().context("Failed to read backend configuration")?;
    match &config.base_url {
        Some(url) => tracing::info!("Backend API: {}", url),
        None => tracing::warn!("NORTHWIND_API is not set; tool calls will report it"),
    }

    let catalog = Arc::new(ToolCatalog::northwind());
    let service = Arc::new(
        NorthwindService::new(catalog, config).context("Failed to create backend client")?,
    );

    let registry = catalog_registry(service);
    tracing::info!("Registered {} tools", registry.len());

    let server = Arc::new(McpServer::new(registry));
    server.start().await?;

    Ok(())
}
