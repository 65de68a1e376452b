// Rust guideline compliant 2026-02-14
//! Bulk product updates with per-request failure isolation.
//!
//! Each request is validated, turned into a minimal
//! [`ProductPatch`](crate::model::ProductPatch) and sent on its own. A bad
//! request or a rejected update is recorded and the batch moves on.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::ProductApi;
use crate::error::{Error, ValidationError};
use crate::model::UpdateRequest;

/// Progress callback for long-running batches.
/// The callback receives a message describing the current step and a progress fraction (0.0..1.0).
pub type ProgressCallback = Arc<dyn Fn(String, f32) + Send + Sync>;

/// Request applied successfully. `index` is the 0-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkSuccess {
    pub index: usize,
    pub product_id: i64,
    pub product_name: String,
}

/// Request that failed validation or was rejected by the store.
#[derive(Debug)]
pub struct BulkFailure {
    pub index: usize,
    /// Id as the caller supplied it, when there was one.
    pub product_id: Option<String>,
    pub error: Error,
}

impl BulkFailure {
    /// Line shown in the bulk report.
    pub fn message(&self) -> String {
        match &self.error {
            Error::Validation(
                err @ (ValidationError::MissingProductId | ValidationError::EmptyUpdate { .. }),
            ) => err.to_string(),
            other => format!(
                "Failed to update product ID {}: {other}",
                self.product_id.as_deref().unwrap_or("unknown")
            ),
        }
    }

    /// Whether the request was rejected before reaching the store.
    pub fn is_validation(&self) -> bool {
        matches!(self.error, Error::Validation(_))
    }
}

/// Outcome of a batch, partitioned but each list in input order.
#[derive(Debug, Default)]
pub struct BulkPlanResult {
    pub successes: Vec<BulkSuccess>,
    pub errors: Vec<BulkFailure>,
}

impl BulkPlanResult {
    pub fn success_count(&self) -> usize {
        self.successes.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

pub struct BulkUpdatePlanner<'a, A> {
    api: &'a A,
    progress: Option<ProgressCallback>,
}

impl<'a, A: ProductApi> BulkUpdatePlanner<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: ProgressCallback) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Apply every request in order. Never fails as a whole.
    pub async fn plan(&self, requests: &[Value]) -> BulkPlanResult {
        let mut result = BulkPlanResult::default();
        let total = requests.len();

        for (index, raw) in requests.iter().enumerate() {
            match self.apply(raw).await {
                Ok((product_id, product_name)) => {
                    debug!(index, product_id, "bulk update applied");
                    result.successes.push(BulkSuccess {
                        index,
                        product_id,
                        product_name,
                    });
                }
                Err((product_id, error)) => {
                    let failure = BulkFailure {
                        index,
                        product_id,
                        error,
                    };
                    warn!(
                        index,
                        validation = failure.is_validation(),
                        error = %failure.error,
                        "bulk update entry failed"
                    );
                    result.errors.push(failure);
                }
            }

            if let Some(cb) = &self.progress {
                cb(
                    format!("Processed {}/{}", index + 1, total),
                    (index + 1) as f32 / total as f32,
                );
            }
        }

        result
    }

    async fn apply(&self, raw: &Value) -> Result<(i64, String), (Option<String>, Error)> {
        let request = UpdateRequest::from_json(raw).map_err(|e| (raw_id_of(raw), e.into()))?;
        let raw_id = request.raw_product_id();
        let product_id = request
            .product_id()
            .map_err(|e| (raw_id.clone(), e.into()))?;

        let patch = request.to_patch();
        if patch.is_empty() {
            return Err((raw_id, ValidationError::EmptyUpdate { product_id }.into()));
        }

        let updated = self
            .api
            .update_product(product_id, &patch)
            .await
            .map_err(|e| (Some(product_id.to_string()), e.into()))?;
        Ok((product_id, updated.name))
    }
}

/// Best-effort id for messages about requests that are not even objects.
fn raw_id_of(raw: &Value) -> Option<String> {
    let present = |key: &str| raw.get(key).filter(|v| !v.is_null());
    present("product_id")
        .or_else(|| present("productId"))
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use serde_json::json;

    use crate::api::ProductFilter;
    use crate::error::ApiError;
    use crate::model::{CategoryRecord, ProductPatch, ProductRecord};

    /// Records every update and fails for ids listed in `reject`.
    #[derive(Default)]
    struct RecordingStore {
        calls: Mutex<Vec<(i64, ProductPatch)>>,
        reject: Vec<i64>,
    }

    impl ProductApi for RecordingStore {
        async fn fetch_products(&self, _: &ProductFilter) -> Result<Vec<ProductRecord>, ApiError> {
            Ok(Vec::new())
        }

        async fn fetch_product(&self, id: i64) -> Result<ProductRecord, ApiError> {
            Err(ApiError::Status {
                status: 404,
                body: format!("no product {id}"),
            })
        }

        async fn update_product(
            &self,
            id: i64,
            patch: &ProductPatch,
        ) -> Result<ProductRecord, ApiError> {
            self.calls.lock().expect("lock").push((id, patch.clone()));
            if self.reject.contains(&id) {
                return Err(ApiError::Status {
                    status: 400,
                    body: "rejected".to_string(),
                });
            }
            Ok(ProductRecord {
                id,
                name: format!("Product {id}"),
                ..Default::default()
            })
        }

        async fn fetch_categories(&self, _: u32) -> Result<Vec<CategoryRecord>, ApiError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_invalid_id_does_not_stop_batch() {
        let store = RecordingStore::default();
        let requests = vec![
            json!({"product_id": 1, "description": "One"}),
            json!({"product_id": "abc", "description": "Two"}),
            json!({"product_id": 3, "meta_title": "Three"}),
        ];

        let result = BulkUpdatePlanner::new(&store).plan(&requests).await;

        assert_eq!(result.success_count(), 2);
        assert_eq!(result.error_count(), 1);
        let ids: Vec<i64> = result.successes.iter().map(|s| s.product_id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(result.successes[1].product_name, "Product 3");

        let failure = &result.errors[0];
        assert_eq!(failure.index, 1);
        assert_eq!(failure.product_id.as_deref(), Some("abc"));
        assert!(failure.is_validation());
        let message = failure.message();
        assert!(message.starts_with("Failed to update product ID abc:"));
    }

    #[tokio::test]
    async fn test_empty_update_skips_store() {
        let store = RecordingStore::default();
        let result = BulkUpdatePlanner::new(&store)
            .plan(&[json!({"product_id": 42})])
            .await;

        assert_eq!(result.success_count(), 0);
        assert_eq!(
            result.errors[0].message(),
            "No update data for product ID 42"
        );
        assert!(store.calls.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn test_missing_id_and_store_failure() {
        let store = RecordingStore {
            reject: vec![7],
            ..Default::default()
        };
        let result = BulkUpdatePlanner::new(&store)
            .plan(&[
                json!({"description": "orphan"}),
                json!({"product_id": 7, "short_description": "x"}),
            ])
            .await;

        let messages: Vec<String> = result.errors.iter().map(BulkFailure::message).collect();
        assert_eq!(
            messages,
            vec![
                "Missing product_id in update".to_string(),
                "Failed to update product ID 7: API request failed: 400 - rejected".to_string(),
            ]
        );
        assert!(!result.errors[1].is_validation());
        assert_eq!(store.calls.lock().expect("lock").len(), 1);
    }

    #[tokio::test]
    async fn test_patch_sent_as_built() {
        let store = RecordingStore::default();
        BulkUpdatePlanner::new(&store)
            .plan(&[json!({
                "productId": 9,
                "metaDescription": "Desc",
                "metaTitle": "Title",
                "description": ""
            })])
            .await;

        let calls = store.calls.lock().expect("lock");
        let (id, patch) = &calls[0];
        assert_eq!(*id, 9);
        assert_eq!(patch.description.as_deref(), Some(""));
        let keys: Vec<&str> = patch.meta_data.iter().map(|m| m.key).collect();
        assert_eq!(keys, vec!["_yoast_wpseo_title", "_yoast_wpseo_metadesc"]);
    }

    #[tokio::test]
    async fn test_progress_reaches_completion() {
        let store = RecordingStore::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let progress: ProgressCallback = Arc::new(move |msg: String, frac: f32| {
            sink.lock().expect("lock").push((msg, frac));
        });

        BulkUpdatePlanner::new(&store)
            .with_progress(progress)
            .plan(&[json!({"product_id": 1, "description": "a"}), json!(null)])
            .await;

        let seen = seen.lock().expect("lock");
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].0, "Processed 2/2");
        assert!((seen[1].1 - 1.0).abs() < f32::EPSILON);
    }
}
