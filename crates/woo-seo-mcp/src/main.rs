// Rust guideline compliant 2026-02-14

use std::path::PathBuf;

use woo_seo_mcp::{config_path, connect, init_tracing, serve_stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let path = config_path(std::env::args_os().nth(1).map(PathBuf::from));
    let client = connect(&path)?;
    serve_stdio(client).await
}
