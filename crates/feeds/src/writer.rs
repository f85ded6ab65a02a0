//! Match mapping writer.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use listmatch_catalog::ProductRecord;

use crate::error::{FeedError, FeedResult};

/// Write `matches` as a single JSON object: listing title -> product record.
pub fn write_matches<W: Write>(
    mut writer: W,
    matches: &BTreeMap<String, ProductRecord>,
) -> FeedResult<()> {
    serde_json::to_writer(&mut writer, matches)
        .map_err(|e| FeedError::Encode(e.to_string()))?;
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `matches` to it.
pub fn create_matches(
    path: impl AsRef<Path>,
    matches: &BTreeMap<String, ProductRecord>,
) -> FeedResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| FeedError::open(path, e))?;
    write_matches(BufWriter::new(file), matches)?;
    tracing::info!(path = %path.display(), entries = matches.len(), "matches written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_single_json_object() {
        let mut matches = BTreeMap::new();
        matches.insert(
            "Canon PowerShot A20".to_string(),
            ProductRecord {
                product_name: "Canon_PowerShot_A20".into(),
                manufacturer: "Canon".into(),
                model: "A20".into(),
                announced_date: "2001-02-26".into(),
                family: None,
            },
        );

        let mut out = Vec::new();
        write_matches(&mut out, &matches).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["Canon PowerShot A20"]["model"], "A20");
        assert!(value["Canon PowerShot A20"]["family"].is_null());
    }

    #[test]
    fn empty_mapping_is_empty_object() {
        let mut out = Vec::new();
        write_matches(&mut out, &BTreeMap::new()).unwrap();
        assert_eq!(out, b"{}");
    }
}
