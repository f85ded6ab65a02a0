//! Matching engine: links free-text listings to canonical catalog products.
//!
//! Resolution runs in two precision-first stages. The listing title must name
//! exactly one catalog manufacturer as a prefix; then the manufacturer's products
//! are tried against the title by name keywords, and the last match in name order
//! wins. Ambiguity at the manufacturer stage is treated as no match.

pub mod matcher;
pub mod reconcile;
pub mod resolver;

pub use matcher::{
    find_best, score, CandidateSet, KeywordPattern, MatchScore, NAME_MATCH_CONFIDENCE,
};
pub use reconcile::{reconcile, ListingOutcome, MatchReport, ReconcileStats, Reconciler};
pub use resolver::{resolve, ManufacturerResolver};
