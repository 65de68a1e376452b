//! Pure auditors over store data. Nothing here performs I/O.

pub mod content;
pub mod images;

pub use content::{classify, ContentAuditReport, ContentFlags, ProductSummary};
pub use images::{audit as audit_images, ImageAuditReport, ImageIssue, Severity, Suggestion};
