//! Store operations composed from the API seam and the auditors.
//!
//! Both front-ends (MCP server and CLI) call these and only differ in how the
//! results are rendered.

use tracing::{info, instrument};

use crate::api::{ProductApi, ProductFilter, MAX_PER_PAGE};
use crate::audit::{self, ContentAuditReport, ImageAuditReport};
use crate::error::{ApiError, Error};
use crate::model::{CategoryRecord, ProductPatch, ProductRecord, UpdateRequest};
use crate::prompts::{MAX_ANALYZE_PRODUCTS, MAX_SEO_BATCH};

/// Content audit of one page of products plus the category list.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    pub report: ContentAuditReport,
    pub categories: Vec<CategoryRecord>,
}

/// Result of a single-product update.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// Every field was absent or empty; the store was not called.
    NothingToSend,
    Updated {
        product_id: i64,
        patch: ProductPatch,
        product: Box<ProductRecord>,
    },
}

/// Fetch up to `max_products` products and up to 100 categories and audit them.
#[instrument(skip(api))]
pub async fn store_snapshot<A: ProductApi>(
    api: &A,
    max_products: u32,
) -> Result<StoreSnapshot, ApiError> {
    let filter = ProductFilter::new(max_products.min(MAX_ANALYZE_PRODUCTS));
    let products = api.fetch_products(&filter).await?;
    let categories = api.fetch_categories(MAX_PER_PAGE).await?;
    let report = audit::classify(&products);
    info!(
        products = report.total,
        categories = categories.len(),
        needs_optimization = report.needs_optimization,
        "store snapshot"
    );
    Ok(StoreSnapshot { report, categories })
}

#[instrument(skip(api))]
pub async fn analyze_products<A: ProductApi>(
    api: &A,
    per_page: u32,
) -> Result<ContentAuditReport, ApiError> {
    let products = api.fetch_products(&ProductFilter::new(per_page)).await?;
    Ok(audit::classify(&products))
}

#[instrument(skip(api))]
pub async fn audit_product_images<A: ProductApi>(
    api: &A,
    product_id: i64,
) -> Result<ImageAuditReport, ApiError> {
    let product = api.fetch_product(product_id).await?;
    Ok(audit::audit_images(&product.name, &product.images))
}

/// Products to feed the SEO prompt, optionally restricted to one category.
#[instrument(skip(api))]
pub async fn seo_candidates<A: ProductApi>(
    api: &A,
    category: Option<i64>,
    limit: u32,
) -> Result<Vec<ProductRecord>, ApiError> {
    let filter = ProductFilter::new(limit.min(MAX_SEO_BATCH)).with_category(category);
    api.fetch_products(&filter).await
}

/// Update one product. Empty-string fields mean "leave unchanged".
#[instrument(skip(api, request))]
pub async fn update_product<A: ProductApi>(
    api: &A,
    request: UpdateRequest,
) -> Result<UpdateOutcome, Error> {
    let request = request.without_empty_fields();
    let product_id = request.product_id()?;
    let patch = request.to_patch();
    if patch.is_empty() {
        return Ok(UpdateOutcome::NothingToSend);
    }
    let product = api.update_product(product_id, &patch).await?;
    info!(product_id, "product updated");
    Ok(UpdateOutcome::Updated {
        product_id,
        patch,
        product: Box::new(product),
    })
}
