//! In-memory [`ProductApi`] for tests and offline runs.
//!
//! Applies filters and patches the way the REST API does for the fields this
//! crate touches. Enabled with the `fake-store` feature.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::api::{clamp_per_page, ProductApi, ProductFilter};
use crate::error::ApiError;
use crate::model::{CategoryRecord, MetaEntry, ProductPatch, ProductRecord};

#[derive(Debug, Default)]
pub struct MemoryStore {
    products: Mutex<Vec<ProductRecord>>,
    categories: Vec<CategoryRecord>,
    rejected: HashSet<i64>,
    update_calls: Mutex<usize>,
}

impl MemoryStore {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self {
            products: Mutex::new(products),
            ..Default::default()
        }
    }

    pub fn with_categories(mut self, categories: Vec<CategoryRecord>) -> Self {
        self.categories = categories;
        self
    }

    /// Make updates to `id` fail with a 400 response.
    pub fn reject_updates_for(mut self, id: i64) -> Self {
        self.rejected.insert(id);
        self
    }

    /// Number of `update_product` calls received, including rejected ones.
    pub fn update_calls(&self) -> usize {
        *lock(&self.update_calls)
    }

    pub fn product(&self, id: i64) -> Option<ProductRecord> {
        lock(&self.products).iter().find(|p| p.id == id).cloned()
    }
}

impl ProductApi for MemoryStore {
    async fn fetch_products(&self, filter: &ProductFilter) -> Result<Vec<ProductRecord>, ApiError> {
        let products = lock(&self.products);
        Ok(products
            .iter()
            .filter(|p| {
                filter
                    .status
                    .as_deref()
                    .is_none_or(|s| p.status.as_str() == s)
            })
            .filter(|p| {
                filter
                    .category
                    .is_none_or(|c| p.categories.iter().any(|cat| cat.id == c))
            })
            .take(filter.per_page as usize)
            .cloned()
            .collect())
    }

    async fn fetch_product(&self, id: i64) -> Result<ProductRecord, ApiError> {
        self.product(id).ok_or_else(|| not_found(id))
    }

    async fn update_product(
        &self,
        id: i64,
        patch: &ProductPatch,
    ) -> Result<ProductRecord, ApiError> {
        *lock(&self.update_calls) += 1;
        if self.rejected.contains(&id) {
            return Err(ApiError::Status {
                status: 400,
                body: format!(
                    r#"{{"code":"rest_invalid_param","message":"Product {id} rejected"}}"#
                ),
            });
        }

        let mut products = lock(&self.products);
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;

        if let Some(description) = &patch.description {
            product.description = description.clone();
        }
        if let Some(short) = &patch.short_description {
            product.short_description = short.clone();
        }
        for update in &patch.meta_data {
            let value = serde_json::Value::String(update.value.clone());
            match product.meta_data.iter_mut().find(|m| m.key == update.key) {
                Some(entry) => entry.value = value,
                None => product.meta_data.push(MetaEntry {
                    id: None,
                    key: update.key.to_string(),
                    value,
                }),
            }
        }
        Ok(product.clone())
    }

    async fn fetch_categories(&self, per_page: u32) -> Result<Vec<CategoryRecord>, ApiError> {
        Ok(self
            .categories
            .iter()
            .take(clamp_per_page(per_page) as usize)
            .cloned()
            .collect())
    }
}

fn not_found(id: i64) -> ApiError {
    ApiError::Status {
        status: 404,
        body: format!(
            r#"{{"code":"woocommerce_rest_product_invalid_id","message":"Invalid ID {id}."}}"#
        ),
    }
}

// Poisoning is ignored.
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
