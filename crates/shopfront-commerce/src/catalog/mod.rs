//! Product catalog module.
//!
//! Contains product, category and variation types, and the static dataset.

mod dataset;
mod product;

pub use dataset::Catalog;
pub use product::{Product, ProductKind, Variation};
