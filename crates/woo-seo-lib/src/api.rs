//! The store API seam.
//!
//! Auditors and the bulk planner only see [`ProductApi`]; [`crate::WooClient`]
//! is the HTTP implementation, and tests substitute an in-memory store.

use std::future::Future;

use serde::Serialize;

use crate::error::ApiError;
use crate::model::{CategoryRecord, ProductPatch, ProductRecord};

/// Largest page the store REST API serves.
pub const MAX_PER_PAGE: u32 = 100;

/// Query for a single page of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<i64>,
    pub per_page: u32,
}

impl ProductFilter {
    /// Page of `per_page` products, clamped to `1..=MAX_PER_PAGE`.
    pub fn new(per_page: u32) -> Self {
        Self {
            status: None,
            category: None,
            per_page: clamp_per_page(per_page),
        }
    }

    /// Filter on status; an empty string means no filter.
    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status = status.filter(|s| !s.trim().is_empty());
        self
    }

    /// Filter on category id; 0 means no filter.
    pub fn with_category(mut self, category: Option<i64>) -> Self {
        self.category = category.filter(|c| *c != 0);
        self
    }

    /// Query-string pairs in the order the store expects them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("per_page", self.per_page.to_string())];
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        pairs
    }
}

pub fn clamp_per_page(per_page: u32) -> u32 {
    per_page.clamp(1, MAX_PER_PAGE)
}

/// Operations the audits need from the store.
///
/// Every failure is an [`ApiError`]; implementations do not retry.
pub trait ProductApi: Sync {
    fn fetch_products(
        &self,
        filter: &ProductFilter,
    ) -> impl Future<Output = Result<Vec<ProductRecord>, ApiError>> + Send;

    fn fetch_product(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<ProductRecord, ApiError>> + Send;

    fn update_product(
        &self,
        id: i64,
        patch: &ProductPatch,
    ) -> impl Future<Output = Result<ProductRecord, ApiError>> + Send;

    fn fetch_categories(
        &self,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<CategoryRecord>, ApiError>> + Send;
}
