//! Store-backed subcommands. Each returns the text to print.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::info;
use woo_seo::ops::{self, StoreSnapshot};
use woo_seo::{report, BulkUpdatePlanner, ProductApi, ProductFilter};

use crate::cli::{AnalyzeArgs, BulkUpdateArgs, Commands, ImagesArgs, ProductsArgs};

/// Products and categories read for `stats`.
const STATS_PAGE: u32 = 100;

/// Run every subcommand except `mcp`, which needs the concrete client.
pub async fn run<A: ProductApi>(api: &A, command: Commands) -> Result<String> {
    match command {
        Commands::Products(args) => products(api, args).await,
        Commands::Product { id } => {
            let product = api
                .fetch_product(id)
                .await
                .with_context(|| format!("fetching product {id}"))?;
            Ok(report::product_detail(&product))
        }
        Commands::Analyze(args) => analyze(api, args).await,
        Commands::Images(args) => images(api, args).await,
        Commands::Stats => {
            let StoreSnapshot { report, categories } = ops::store_snapshot(api, STATS_PAGE)
                .await
                .context("collecting store statistics")?;
            Ok(report::store_stats(&report, categories.len()))
        }
        Commands::BulkUpdate(args) => bulk_update(api, args).await,
        Commands::Mcp => bail!("the mcp command is served by the binary entrypoint"),
    }
}

async fn products<A: ProductApi>(api: &A, args: ProductsArgs) -> Result<String> {
    let filter = ProductFilter::new(args.per_page)
        .with_status(args.status)
        .with_category(args.category);
    let products = api
        .fetch_products(&filter)
        .await
        .context("fetching products")?;
    Ok(report::product_list(&products))
}

async fn analyze<A: ProductApi>(api: &A, args: AnalyzeArgs) -> Result<String> {
    let analysis = ops::analyze_products(api, args.per_page)
        .await
        .context("analyzing products")?;
    if args.json {
        return Ok(serde_json::to_string_pretty(&analysis)?);
    }
    Ok(report::content_analysis(&analysis))
}

async fn images<A: ProductApi>(api: &A, args: ImagesArgs) -> Result<String> {
    let audit = ops::audit_product_images(api, args.id)
        .await
        .with_context(|| format!("auditing images of product {}", args.id))?;
    if args.json {
        return Ok(serde_json::to_string_pretty(&audit)?);
    }
    Ok(report::image_audit(&audit))
}

async fn bulk_update<A: ProductApi>(api: &A, args: BulkUpdateArgs) -> Result<String> {
    let updates = read_updates(&args.file)?;
    info!(count = updates.len(), file = %args.file.display(), "applying bulk update");

    let planner = BulkUpdatePlanner::new(api);

    #[cfg(feature = "progress")]
    let (planner, bar) = {
        use std::sync::Arc;

        use indicatif::{ProgressBar, ProgressStyle};

        let total = updates.len();
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("##-"),
        );
        bar.set_message("Updating products...");

        let progress_cb: woo_seo::ProgressCallback = Arc::new({
            let bar = bar.clone();
            move |msg: String, fraction: f32| {
                bar.set_message(msg);
                bar.set_position((fraction * total as f32).round() as u64);
            }
        });
        (planner.with_progress(progress_cb), bar)
    };

    let result = planner.plan(&updates).await;

    #[cfg(feature = "progress")]
    bar.finish_and_clear();

    Ok(report::bulk_result(&result))
}

/// Parse the bulk update file: a JSON array of update objects.
fn read_updates(path: &Path) -> Result<Vec<Value>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    match value {
        Value::Array(items) => Ok(items),
        _ => bail!("{} must contain a JSON array of updates", path.display()),
    }
}
