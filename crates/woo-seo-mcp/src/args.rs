// Rust guideline compliant 2026-02-14

use std::fmt::Display;
use std::str::FromStr;

use rmcp::schemars;
use serde::{Deserialize, Deserializer};

pub const DEFAULT_LIST_PER_PAGE: u32 = 10;
pub const DEFAULT_ANALYZE_PER_PAGE: u32 = 50;

/// Input for listing products.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct GetProductsInput {
    #[schemars(description = "Product status filter (publish, draft, pending, private)")]
    pub status: Option<String>,
    #[schemars(description = "Category id filter")]
    pub category: Option<i64>,
    #[schemars(description = "Number of products to return (default: 10, max: 100)")]
    pub per_page: Option<u32>,
}

/// Input for tools addressing a single product.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProductIdInput {
    #[schemars(description = "WooCommerce product id")]
    pub product_id: i64,
}

/// Input for updating a single product. Empty strings leave a field unchanged.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct UpdateProductInput {
    #[schemars(description = "WooCommerce product id")]
    pub product_id: i64,
    #[schemars(description = "New long description (HTML allowed)")]
    pub description: Option<String>,
    #[schemars(description = "New short description")]
    pub short_description: Option<String>,
    #[schemars(description = "New SEO title")]
    pub meta_title: Option<String>,
    #[schemars(description = "New SEO meta description")]
    pub meta_description: Option<String>,
}

/// Input for the content analysis.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeProductsInput {
    #[schemars(description = "Number of products to analyze (default: 50, max: 100)")]
    pub per_page: Option<u32>,
}

/// Input for bulk updates.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BulkUpdateInput {
    #[schemars(
        description = "List of product updates, each containing product_id and any of description, short_description, meta_title, meta_description"
    )]
    pub updates: Vec<serde_json::Value>,
}

/// Arguments of the `analyze_store` prompt.
///
/// Prompt arguments often arrive as strings, so numbers and booleans are
/// accepted in either form.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeStoreArgs {
    #[serde(default, deserialize_with = "loose")]
    #[schemars(with = "Option<bool>")]
    #[schemars(description = "List products missing descriptions and SEO data (default: true)")]
    pub include_products: Option<bool>,
    #[serde(default, deserialize_with = "loose")]
    #[schemars(with = "Option<u32>")]
    #[schemars(description = "Number of products to analyze (default: 50, max: 100)")]
    pub max_products: Option<u32>,
}

/// Arguments of the `bulk_generate_seo` prompt.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct BulkGenerateSeoArgs {
    #[serde(default, deserialize_with = "loose")]
    #[schemars(with = "Option<i64>")]
    #[schemars(description = "Only consider products in this category")]
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "loose")]
    #[schemars(with = "Option<u32>")]
    #[schemars(description = "Number of products to consider (default: 20, max: 50)")]
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Typed(T),
    Text(String),
}

/// Accept `T`, a string parsing as `T`, or null. A blank string is `None`.
fn loose<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<Loose<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Loose::Typed(value)) => Ok(Some(value)),
        Some(Loose::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Loose::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
