//! Content completeness classification over a batch of products.
//!
//! Every product is checked against four predicates (missing description,
//! missing short description, missing SEO meta, low-quality description) and
//! the batch is summarized into a [`ContentAuditReport`]. The auditor only
//! reads its input.

use serde::Serialize;

use crate::model::{ProductRecord, ProductStatus};

/// Descriptions shorter than this (in characters, after trimming) are low quality.
pub const LOW_QUALITY_DESCRIPTION_CHARS: usize = 100;

/// Per-product result of the four content predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentFlags {
    pub missing_description: bool,
    pub missing_short_description: bool,
    pub missing_seo: bool,
    /// Present but under [`LOW_QUALITY_DESCRIPTION_CHARS`]. Never set together
    /// with `missing_description`.
    pub low_quality_description: bool,
}

impl ContentFlags {
    pub fn evaluate(product: &ProductRecord) -> Self {
        let description = product.description.trim();
        let missing_description = description.is_empty();
        ContentFlags {
            missing_description,
            missing_short_description: product.short_description.trim().is_empty(),
            missing_seo: product.seo_title().is_none() || product.seo_description().is_none(),
            low_quality_description: !missing_description
                && description.chars().count() < LOW_QUALITY_DESCRIPTION_CHARS,
        }
    }

    /// Missing description, short description or SEO meta.
    ///
    /// A low-quality description alone does not count; the store statistics
    /// have always reported "products needing work" this way.
    pub fn needs_optimization(&self) -> bool {
        self.missing_description || self.missing_short_description || self.missing_seo
    }

    /// Human labels for the missing text fields, as shown in product listings.
    pub fn missing_content_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.missing_description {
            labels.push("description");
        }
        if self.missing_short_description {
            labels.push("short description");
        }
        labels
    }
}

/// Listing entry for a product that matched a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub status: ProductStatus,
    pub price: String,
}

impl From<&ProductRecord> for ProductSummary {
    fn from(p: &ProductRecord) -> Self {
        ProductSummary {
            id: p.id,
            name: p.name.clone(),
            status: p.status.clone(),
            price: p.price.clone(),
        }
    }
}

/// Aggregate result of [`classify`]. Listings are complete; truncation for
/// display belongs to the formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentAuditReport {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
    pub missing_description: Vec<ProductSummary>,
    pub missing_short_description: Vec<ProductSummary>,
    pub missing_seo: Vec<ProductSummary>,
    pub low_quality_description: Vec<ProductSummary>,
    /// Distinct products with at least one of the three "missing" flags.
    pub needs_optimization: usize,
}

impl ContentAuditReport {
    /// Share of products needing no work, in percent. 100.0 for an empty batch.
    pub fn optimization_score(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.total - self.needs_optimization) as f64 / self.total as f64 * 100.0
    }
}

/// Classify a batch of products.
pub fn classify(products: &[ProductRecord]) -> ContentAuditReport {
    let mut report = ContentAuditReport {
        total: products.len(),
        ..Default::default()
    };

    for product in products {
        match product.status {
            ProductStatus::Publish => report.published += 1,
            ProductStatus::Draft => report.drafts += 1,
            _ => {}
        }

        let flags = ContentFlags::evaluate(product);
        if flags.missing_description {
            report.missing_description.push(product.into());
        }
        if flags.low_quality_description {
            report.low_quality_description.push(product.into());
        }
        if flags.missing_short_description {
            report.missing_short_description.push(product.into());
        }
        if flags.missing_seo {
            report.missing_seo.push(product.into());
        }
        if flags.needs_optimization() {
            report.needs_optimization += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetaEntry;
    use crate::seo::{SEO_DESCRIPTION_KEY, SEO_TITLE_KEY};
    use serde_json::json;

    fn product(id: i64, description: &str, short: &str, seo: bool) -> ProductRecord {
        let meta_data = if seo {
            vec![
                MetaEntry {
                    id: None,
                    key: SEO_TITLE_KEY.to_string(),
                    value: json!("Title"),
                },
                MetaEntry {
                    id: None,
                    key: SEO_DESCRIPTION_KEY.to_string(),
                    value: json!("Meta description"),
                },
            ]
        } else {
            Vec::new()
        };
        ProductRecord {
            id,
            name: format!("Product {id}"),
            status: ProductStatus::Publish,
            description: description.to_string(),
            short_description: short.to_string(),
            meta_data,
            ..Default::default()
        }
    }

    #[test]
    fn empty_batch_scores_full_marks() {
        let report = classify(&[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.needs_optimization, 0);
        assert_eq!(report.optimization_score(), 100.0);
    }

    #[test]
    fn missing_description_and_seo_counted_once() {
        let p = product(1, "", &"x".repeat(50), false);
        let report = classify(&[p]);

        assert_eq!(report.missing_description.len(), 1);
        assert_eq!(report.missing_seo.len(), 1);
        assert!(report.low_quality_description.is_empty());
        assert!(report.missing_short_description.is_empty());
        assert_eq!(report.needs_optimization, 1);
        assert_eq!(report.optimization_score(), 0.0);
    }

    #[test]
    fn short_description_with_seo_is_low_quality_only() {
        // Low quality alone does not make a product "need optimization".
        let p = product(2, &"x".repeat(50), "Short copy", true);
        let report = classify(&[p]);

        assert_eq!(report.low_quality_description.len(), 1);
        assert!(report.missing_description.is_empty());
        assert!(report.missing_seo.is_empty());
        assert_eq!(report.needs_optimization, 0);
        assert_eq!(report.optimization_score(), 100.0);
    }

    #[test]
    fn whitespace_description_is_missing_not_low_quality() {
        let flags = ContentFlags::evaluate(&product(3, "   \n", "ok", true));
        assert!(flags.missing_description);
        assert!(!flags.low_quality_description);
    }

    #[test]
    fn low_quality_threshold_counts_characters() {
        let at_threshold = ContentFlags::evaluate(&product(4, &"é".repeat(100), "ok", true));
        assert!(!at_threshold.low_quality_description);
        let below = ContentFlags::evaluate(&product(5, &"é".repeat(99), "ok", true));
        assert!(below.low_quality_description);
    }

    #[test]
    fn either_seo_field_missing_flags_product() {
        let mut p = product(6, &"x".repeat(120), "ok", true);
        p.meta_data.truncate(1);
        assert!(ContentFlags::evaluate(&p).missing_seo);
    }

    #[test]
    fn status_counts_and_score() {
        let mut draft = product(7, "", "", false);
        draft.status = ProductStatus::Draft;
        let mut private = product(8, &"x".repeat(150), "ok", true);
        private.status = ProductStatus::Private;
        let good = product(9, &"x".repeat(150), "ok", true);
        let products = vec![draft, private, good];
        let before = products.clone();

        let report = classify(&products);
        assert_eq!(report.total, 3);
        assert_eq!(report.published, 1);
        assert_eq!(report.drafts, 1);
        assert_eq!(report.needs_optimization, 1);
        assert!((report.optimization_score() - 66.666).abs() < 0.01);

        assert_eq!(products, before);
        assert_eq!(classify(&products), report);
    }

    #[test]
    fn listings_keep_input_order() {
        let products: Vec<_> = (1..=12).map(|id| product(id, "", "ok", true)).collect();
        let report = classify(&products);
        let ids: Vec<i64> = report.missing_description.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn missing_content_labels() {
        let flags = ContentFlags::evaluate(&product(10, "", "", true));
        assert_eq!(
            flags.missing_content_labels(),
            vec!["description", "short description"]
        );
    }
}
