// Rust guideline compliant 2026-02-14

//! Tool, resource and prompt bodies, generic over the store API.
//!
//! Each function returns `Ok(text)` for anything worth showing the caller and
//! `Err` only for failures; the server turns errors into text.

use woo_seo::api::{clamp_per_page, ProductFilter};
use woo_seo::ops::{self, UpdateOutcome};
use woo_seo::prompts::{DEFAULT_ANALYZE_PRODUCTS, DEFAULT_SEO_BATCH};
use woo_seo::{prompts, report, ApiError, BulkUpdatePlanner, Error, ProductApi, UpdateRequest};

use crate::args::{
    AnalyzeProductsInput, AnalyzeStoreArgs, BulkGenerateSeoArgs, BulkUpdateInput,
    GetProductsInput, UpdateProductInput, DEFAULT_ANALYZE_PER_PAGE, DEFAULT_LIST_PER_PAGE,
};

/// Products per page and categories fetched for the stats resource.
const STATS_PAGE: u32 = 100;

pub const NO_UPDATE_DATA: &str = "Error: No update data provided";

pub async fn get_products<A: ProductApi>(
    api: &A,
    input: GetProductsInput,
) -> Result<String, ApiError> {
    let filter = ProductFilter::new(input.per_page.unwrap_or(DEFAULT_LIST_PER_PAGE))
        .with_status(input.status)
        .with_category(input.category);
    let products = api.fetch_products(&filter).await?;
    Ok(report::product_list(&products))
}

pub async fn get_product_by_id<A: ProductApi>(
    api: &A,
    product_id: i64,
) -> Result<String, ApiError> {
    let product = api.fetch_product(product_id).await?;
    Ok(report::product_detail(&product))
}

pub async fn update_product<A: ProductApi>(
    api: &A,
    input: UpdateProductInput,
) -> Result<String, Error> {
    let request = UpdateRequest {
        product_id: Some(input.product_id.into()),
        description: input.description,
        short_description: input.short_description,
        meta_title: input.meta_title,
        meta_description: input.meta_description,
    };
    match ops::update_product(api, request).await? {
        UpdateOutcome::NothingToSend => Ok(NO_UPDATE_DATA.to_string()),
        UpdateOutcome::Updated {
            product_id,
            patch,
            product,
        } => Ok(report::update_result(product_id, &patch, &product)),
    }
}

pub async fn analyze_products<A: ProductApi>(
    api: &A,
    input: AnalyzeProductsInput,
) -> Result<String, ApiError> {
    let per_page = clamp_per_page(input.per_page.unwrap_or(DEFAULT_ANALYZE_PER_PAGE));
    let analysis = ops::analyze_products(api, per_page).await?;
    Ok(report::content_analysis(&analysis))
}

/// Never fails as a whole; per-item failures are part of the report.
pub async fn bulk_update_products<A: ProductApi>(api: &A, input: BulkUpdateInput) -> String {
    let result = BulkUpdatePlanner::new(api).plan(&input.updates).await;
    report::bulk_result(&result)
}

pub async fn audit_product_images<A: ProductApi>(
    api: &A,
    product_id: i64,
) -> Result<String, ApiError> {
    let audit = ops::audit_product_images(api, product_id).await?;
    Ok(report::image_audit(&audit))
}

pub async fn store_stats<A: ProductApi>(api: &A) -> Result<String, ApiError> {
    let snapshot = ops::store_snapshot(api, STATS_PAGE).await?;
    Ok(report::store_stats(
        &snapshot.report,
        snapshot.categories.len(),
    ))
}

pub async fn analyze_store_prompt<A: ProductApi>(
    api: &A,
    args: AnalyzeStoreArgs,
) -> Result<String, ApiError> {
    let max_products = args.max_products.unwrap_or(DEFAULT_ANALYZE_PRODUCTS);
    let snapshot = ops::store_snapshot(api, max_products).await?;
    Ok(prompts::analyze_store(
        &snapshot.report,
        &snapshot.categories,
        args.include_products.unwrap_or(true),
    ))
}

pub async fn bulk_generate_seo_prompt<A: ProductApi>(
    api: &A,
    args: BulkGenerateSeoArgs,
) -> Result<String, ApiError> {
    let limit = args.limit.unwrap_or(DEFAULT_SEO_BATCH);
    let products = ops::seo_candidates(api, args.category_id, limit).await?;
    Ok(prompts::bulk_generate_seo(&products))
}
