//! Reconciliation driver: listings in, title-keyed match mapping out.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use listmatch_catalog::{CatalogIndex, Listing, Product, ProductRecord};
use listmatch_core::PatternMode;

use crate::matcher::CandidateSet;
use crate::resolver::ManufacturerResolver;

/// What happened to a single listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOutcome<'a> {
    Matched(&'a Product),
    /// Zero or several catalog manufacturers prefix the title.
    UnresolvedManufacturer,
    /// The manufacturer resolved but has no usable candidates.
    NoCandidates,
    NoKeywordMatch,
}

/// Per-outcome listing counts for one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileStats {
    pub listings: usize,
    pub matched: usize,
    pub unresolved_manufacturer: usize,
    pub no_candidates: usize,
    pub no_keyword_match: usize,
}

impl ReconcileStats {
    fn record(&mut self, outcome: &ListingOutcome<'_>) {
        self.listings += 1;
        match outcome {
            ListingOutcome::Matched(_) => self.matched += 1,
            ListingOutcome::UnresolvedManufacturer => self.unresolved_manufacturer += 1,
            ListingOutcome::NoCandidates => self.no_candidates += 1,
            ListingOutcome::NoKeywordMatch => self.no_keyword_match += 1,
        }
    }
}

/// Result of a reconciliation pass.
///
/// `matches` is keyed by listing title. Two listings sharing a title collapse
/// into one entry, and the later listing wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: BTreeMap<String, ProductRecord>,
    pub stats: ReconcileStats,
}

/// Matches listings against a built catalog.
///
/// Everything derived from the catalog (manufacturer patterns, name-sorted
/// candidate sets) is compiled once here; matching itself only reads.
#[derive(Debug, Clone)]
pub struct Reconciler<'a> {
    resolver: ManufacturerResolver,
    candidates: HashMap<&'a str, CandidateSet<'a>>,
}

impl<'a> Reconciler<'a> {
    pub fn new(index: &'a CatalogIndex, mode: PatternMode) -> Self {
        let resolver = ManufacturerResolver::new(index.manufacturers(), mode);
        let candidates: HashMap<&'a str, CandidateSet<'a>> = index
            .manufacturers()
            .iter()
            .map(|m| (m.as_str(), CandidateSet::new(index.candidates_for(m), mode)))
            .collect();

        tracing::debug!(
            products = index.len(),
            manufacturers = resolver.len(),
            rejected_manufacturers = resolver.rejected().len(),
            usable_products = candidates.values().map(CandidateSet::len).sum::<usize>(),
            %mode,
            "reconciler ready"
        );

        Self {
            resolver,
            candidates,
        }
    }

    pub fn match_listing(&self, listing: &Listing) -> ListingOutcome<'a> {
        let Some(manufacturer) = self.resolver.resolve(listing.title()) else {
            return ListingOutcome::UnresolvedManufacturer;
        };

        let candidates = match self.candidates.get(manufacturer) {
            Some(set) if !set.is_empty() => set,
            _ => return ListingOutcome::NoCandidates,
        };

        match candidates.best_match(listing) {
            Some(product) => ListingOutcome::Matched(product),
            None => ListingOutcome::NoKeywordMatch,
        }
    }

    pub fn reconcile<'l, I>(&self, listings: I) -> MatchReport
    where
        I: IntoIterator<Item = &'l Listing>,
    {
        let mut report = MatchReport::default();

        for listing in listings {
            let outcome = self.match_listing(listing);
            report.stats.record(&outcome);

            match outcome {
                ListingOutcome::Matched(product) => {
                    report
                        .matches
                        .insert(listing.title().to_string(), ProductRecord::from(product));
                }
                skipped => {
                    tracing::debug!(
                        title = listing.title(),
                        outcome = ?skipped,
                        "listing not matched"
                    );
                }
            }
        }

        tracing::info!(
            listings = report.stats.listings,
            matched = report.stats.matched,
            unresolved_manufacturer = report.stats.unresolved_manufacturer,
            no_candidates = report.stats.no_candidates,
            no_keyword_match = report.stats.no_keyword_match,
            entries = report.matches.len(),
            "reconciliation finished"
        );

        report
    }
}

/// Build the catalog index from `products` and reconcile `listings` against it.
pub fn reconcile<P>(products: P, listings: &[Listing], mode: PatternMode) -> MatchReport
where
    P: IntoIterator<Item = Product>,
{
    let index: CatalogIndex = products.into_iter().collect();
    Reconciler::new(&index, mode).reconcile(listings)
}
