//! Line-delimited JSON readers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;

use listmatch_catalog::{Listing, Product};

use crate::error::{FeedError, FeedResult};

/// Decode non-blank lines of `reader`, handing each decode failure to `on_error`.
///
/// Lines are split on raw bytes, so a line that is not valid UTF-8 is a decode
/// failure like any other. `on_error` returns `Ok(())` to skip the line or an
/// error to stop.
fn decode_lines<T, R, F>(reader: R, mut on_error: F) -> FeedResult<Vec<T>>
where
    T: DeserializeOwned,
    R: BufRead,
    F: FnMut(usize, &[u8], serde_json::Error) -> FeedResult<()>,
{
    let mut records = Vec::new();
    for (i, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let trimmed = line.trim_ascii();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_slice::<T>(trimmed) {
            Ok(record) => records.push(record),
            Err(e) => on_error(i + 1, trimmed, e)?,
        }
    }
    Ok(records)
}

/// Load catalog products, one JSON object per line.
///
/// A line that does not decode is skipped with a warning; the rest of the
/// catalog still loads.
pub fn load_products<R: BufRead>(reader: R) -> FeedResult<Vec<Product>> {
    let mut skipped = 0usize;
    let products = decode_lines(reader, |line, raw, e| {
        skipped += 1;
        tracing::warn!(
            line,
            record = %String::from_utf8_lossy(raw),
            error = %e,
            "skipping undecodable catalog record"
        );
        Ok(())
    })?;

    tracing::info!(products = products.len(), skipped, "catalog loaded");
    Ok(products)
}

/// Load marketplace listings, one JSON object per line.
///
/// Unlike the catalog, a listing line that does not decode fails the load.
pub fn load_listings<R: BufRead>(reader: R) -> FeedResult<Vec<Listing>> {
    let listings = decode_lines(reader, |line, _, e| {
        Err(FeedError::Decode {
            line,
            reason: e.to_string(),
        })
    })?;

    tracing::info!(listings = listings.len(), "listings loaded");
    Ok(listings)
}

fn open(path: &Path) -> FeedResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| FeedError::open(path, e))
}

pub fn open_products(path: impl AsRef<Path>) -> FeedResult<Vec<Product>> {
    load_products(open(path.as_ref())?)
}

pub fn open_listings(path: impl AsRef<Path>) -> FeedResult<Vec<Listing>> {
    load_listings(open(path.as_ref())?)
}
