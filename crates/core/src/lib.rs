//! `listmatch-core`: shared building blocks for listing reconciliation.
//!
//! This crate contains **pure** primitives (no IO): the error model, the pattern
//! compilation policy and the value-object marker used by the catalog types.

pub mod error;
pub mod pattern;
pub mod value_object;

pub use error::{MatchError, MatchResult};
pub use pattern::PatternMode;
pub use value_object::ValueObject;
