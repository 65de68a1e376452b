//! CLI for WooCommerce content and SEO audits.
//!
//! Runs the same operations as the MCP server against the configured store
//! and prints the reports. `woo-seo mcp` starts the stdio server itself.
//!
//! Usage examples:
//!  woo-seo --config store.json analyze --per-page 100
//!  woo-seo images 42 --json
//!  woo-seo bulk-update updates.json

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use woo_seo_mcp::{config_path, connect, init_tracing, serve_stdio};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = connect(&config_path(cli.config))?;

    match cli.command {
        Commands::Mcp => serve_stdio(client).await,
        command => {
            let output = commands::run(&client, command).await?;
            println!("{output}");
            Ok(())
        }
    }
}
