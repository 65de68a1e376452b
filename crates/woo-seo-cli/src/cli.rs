use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "woo-seo",
    about = "Audit and improve WooCommerce product content and SEO metadata",
    version
)]
pub struct Cli {
    /// Path to the store configuration JSON (default: ./config.json).
    #[arg(long, global = true, env = "WOO_SEO_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, flagging missing descriptions.
    Products(ProductsArgs),

    /// Show one product with its SEO metadata.
    Product {
        /// Product id.
        id: i64,
    },

    /// Content analysis over one page of products.
    Analyze(AnalyzeArgs),

    /// Audit the images of one product.
    Images(ImagesArgs),

    /// Store-wide statistics and optimization score.
    Stats,

    /// Apply a JSON array of product updates.
    BulkUpdate(BulkUpdateArgs),

    /// Run the MCP stdio server.
    Mcp,
}

#[derive(Args, Debug)]
pub struct ProductsArgs {
    /// Status filter (publish, draft, pending, private).
    #[arg(long)]
    pub status: Option<String>,

    /// Category id filter.
    #[arg(long)]
    pub category: Option<i64>,

    /// Products per page (max 100).
    #[arg(long, default_value_t = 10)]
    pub per_page: u32,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Products to analyze (max 100).
    #[arg(long, default_value_t = 50)]
    pub per_page: u32,

    /// Print the structured report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ImagesArgs {
    /// Product id.
    pub id: i64,

    /// Print the structured report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct BulkUpdateArgs {
    /// JSON file holding an array of update objects.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_products_filters() {
        let cli = Cli::try_parse_from([
            "woo-seo",
            "--config",
            "store.json",
            "products",
            "--status",
            "draft",
            "--per-page",
            "25",
        ])
        .expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("store.json")));
        match cli.command {
            Commands::Products(args) => {
                assert_eq!(args.status.as_deref(), Some("draft"));
                assert_eq!(args.category, None);
                assert_eq!(args.per_page, 25);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["woo-seo", "images", "42", "--json", "--config", "c.json"])
            .expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
        assert!(matches!(
            cli.command,
            Commands::Images(ImagesArgs { id: 42, json: true })
        ));
    }

    #[test]
    fn test_parse_defaults_and_kebab_case() {
        let cli = Cli::try_parse_from(["woo-seo", "analyze"]).expect("parse");
        assert!(matches!(
            cli.command,
            Commands::Analyze(AnalyzeArgs {
                per_page: 50,
                json: false
            })
        ));

        let cli = Cli::try_parse_from(["woo-seo", "bulk-update", "updates.json"]).expect("parse");
        assert!(matches!(cli.command, Commands::BulkUpdate(_)));
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["woo-seo", "product", "abc"]).is_err());
    }
}
