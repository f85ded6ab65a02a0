//! Catalog module.
//!
//! Canonical products, marketplace listings and the per-manufacturer index used
//! to look up match candidates. Pure data structures (no IO).

pub mod index;
pub mod model;

pub use index::{CatalogBuilder, CatalogIndex};
pub use model::{Listing, Product, ProductRecord};
