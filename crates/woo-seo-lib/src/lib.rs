//! Content and SEO audits for WooCommerce product catalogs.
//!
//! The crate is split into pure parts (data model, auditors, report and prompt
//! rendering) and the parts that talk to a store (the [`ProductApi`] seam, its
//! HTTP implementation [`WooClient`], and the bulk planner). Front-ends build
//! one `WooClient` from a [`StoreConfig`] and pass it to the operations in
//! [`ops`].
//
// Public modules
pub mod api;
pub mod audit;
pub mod bulk;
pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "fake-store"))]
pub mod memory;
pub mod model;
pub mod ops;
pub mod prompts;
pub mod report;
pub mod seo;

// Re-export primary types for ergonomic use.
pub use api::{ProductApi, ProductFilter};
pub use audit::{audit_images, classify, ContentAuditReport, ImageAuditReport};
pub use bulk::{BulkPlanResult, BulkUpdatePlanner, ProgressCallback};
pub use client::WooClient;
pub use config::StoreConfig;
pub use error::{ApiError, ConfigError, Error, Result, ValidationError};
pub use model::{CategoryRecord, ProductRecord, UpdateRequest};
