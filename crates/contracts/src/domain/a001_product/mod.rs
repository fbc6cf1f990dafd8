//! Product showcase: catalog data model and view shaping shared with the frontend

pub mod aggregate;
pub mod catalog;
pub mod detail;

// Re-exports
pub use aggregate::{duplicate_ids, find_by_id, parse_catalog, Product};
pub use catalog::{visible_cards, CatalogFilter, CatalogQuery, ProductCard};
pub use detail::{DetailField, Gallery, InquiryContext, ProductDetail, PLACEHOLDER};
