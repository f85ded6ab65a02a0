//! Feed IO: line-delimited JSON catalogs and listings in, match mapping out.
//!
//! The matching crates never touch files; this crate is the only place that
//! does.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{FeedError, FeedResult};
pub use reader::{load_listings, load_products, open_listings, open_products};
pub use writer::{create_matches, write_matches};
