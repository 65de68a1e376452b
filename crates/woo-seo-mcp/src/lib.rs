// Rust guideline compliant 2026-02-14

//! MCP server for WooCommerce content and SEO audits.
//!
//! Shared by the `woo-seo-mcp` binary and the `woo-seo mcp` subcommand.

pub mod args;
pub mod handlers;
pub mod server;

use std::path::PathBuf;

use anyhow::Context;
use rmcp::{transport::stdio, ServiceExt};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use woo_seo::{StoreConfig, WooClient};

pub use server::WooSeoServer;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "WOO_SEO_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
const DEFAULT_LOG_FILTER: &str = "woo_seo=info,woo_seo_mcp=info";

/// Install the global subscriber. Logs go to stderr; stdout is the transport.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A subscriber may already be installed by an embedding binary.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init();
}

/// Configuration path from an explicit argument, `WOO_SEO_CONFIG`, or the default.
pub fn config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load the store configuration and build the shared client.
pub fn connect(path: &std::path::Path) -> anyhow::Result<WooClient> {
    let config = StoreConfig::load(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    let client = WooClient::new(config).context("failed to build store client")?;
    let config = client.config();
    info!(store = %config.store_url, api_version = %config.api_version, "store configured");
    Ok(client)
}

/// Serve MCP over stdio until the client disconnects.
pub async fn serve_stdio(client: WooClient) -> anyhow::Result<()> {
    let service = WooSeoServer::new(client)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    info!("MCP server ready on stdio");
    service.waiting().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_wins() {
        let path = config_path(Some(PathBuf::from("/tmp/store.json")));
        assert_eq!(path, PathBuf::from("/tmp/store.json"));
    }

    #[test]
    fn test_connect_reports_missing_file() {
        let path = std::env::temp_dir().join("woo_seo_mcp_missing_config.json");
        let err = connect(&path).expect_err("missing config");
        assert!(format!("{err:#}").contains("Configuration file not found"));
    }
}
