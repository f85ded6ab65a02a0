//! Batch reconciliation entry point: configuration and the load, match, write
//! pipeline.

pub mod config;

use anyhow::Context;

use listmatch_catalog::CatalogIndex;
use listmatch_matching::{ReconcileStats, Reconciler};

pub use config::Config;

/// Run one reconciliation pass with the paths and mode in `config`.
pub fn run(config: &Config) -> anyhow::Result<ReconcileStats> {
    tracing::info!(
        products = %config.products_path.display(),
        listings = %config.listings_path.display(),
        matches = %config.matches_path.display(),
        pattern_mode = %config.pattern_mode,
        "starting reconciliation"
    );

    let index: CatalogIndex = listmatch_feeds::open_products(&config.products_path)
        .context("loading catalog")?
        .into_iter()
        .collect();

    // The whole listing feed is held in memory; fine for tens of thousands of rows.
    let listings =
        listmatch_feeds::open_listings(&config.listings_path).context("loading listings")?;

    let reconciler = Reconciler::new(&index, config.pattern_mode);
    let report = reconciler.reconcile(&listings);

    listmatch_feeds::create_matches(&config.matches_path, &report.matches)
        .context("writing matches")?;

    Ok(report.stats)
}
