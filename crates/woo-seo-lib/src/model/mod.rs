pub mod category;
pub mod product;
pub mod update;

pub use category::CategoryRecord;
pub use product::{CategoryRef, ImageRecord, MetaEntry, ProductRecord, ProductStatus};
pub use update::{MetaUpdate, ProductPatch, UpdateRequest};
