//! Environment-driven configuration.

use std::path::PathBuf;

use anyhow::{anyhow, Context};

use listmatch_core::PatternMode;
use listmatch_observability::LogFormat;

pub const PRODUCTS_FILE: &str = "PRODUCTS_FILE";
pub const LISTINGS_FILE: &str = "LISTINGS_FILE";
pub const MATCHES_FILE: &str = "MATCHES_FILE";
pub const PATTERN_MODE: &str = "LISTMATCH_PATTERN_MODE";
pub const LOG_FORMAT: &str = "LISTMATCH_LOG_FORMAT";

const DEFAULT_PRODUCTS: &str = "products.txt";
const DEFAULT_LISTINGS: &str = "listings.txt";
const DEFAULT_MATCHES: &str = "matches.txt";
const DEFAULT_PATTERN_MODE: &str = "raw";
const DEFAULT_LOG_FORMAT: &str = "json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub products_path: PathBuf,
    pub listings_path: PathBuf,
    pub matches_path: PathBuf,
    pub pattern_mode: PatternMode,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            products_path: PathBuf::from(DEFAULT_PRODUCTS),
            listings_path: PathBuf::from(DEFAULT_LISTINGS),
            matches_path: PathBuf::from(DEFAULT_MATCHES),
            pattern_mode: PatternMode::Raw,
            log_format: LogFormat::Json,
        }
    }
}

/// Read `key`, logging when the default is used instead.
fn setting<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        tracing::info!(key, default, "setting not provided; using default");
        default.to_string()
    })
}

fn parse_log_format(value: &str) -> anyhow::Result<LogFormat> {
    value
        .parse::<LogFormat>()
        .map_err(|e: String| anyhow!(e))
        .with_context(|| format!("invalid {LOG_FORMAT}"))
}

/// Log output format from the environment.
///
/// Read on its own so logging can be initialized before the rest of the
/// configuration is parsed (and reported).
pub fn log_format_from_env() -> anyhow::Result<LogFormat> {
    match std::env::var(LOG_FORMAT) {
        Ok(value) => parse_log_format(&value),
        Err(_) => Ok(LogFormat::default()),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pattern_mode = setting(&lookup, PATTERN_MODE, DEFAULT_PATTERN_MODE)
            .parse::<PatternMode>()
            .with_context(|| format!("invalid {PATTERN_MODE}"))?;
        let log_format = parse_log_format(&setting(&lookup, LOG_FORMAT, DEFAULT_LOG_FORMAT))?;

        Ok(Self {
            products_path: setting(&lookup, PRODUCTS_FILE, DEFAULT_PRODUCTS).into(),
            listings_path: setting(&lookup, LISTINGS_FILE, DEFAULT_LISTINGS).into(),
            matches_path: setting(&lookup, MATCHES_FILE, DEFAULT_MATCHES).into(),
            pattern_mode,
            log_format,
        })
    }
}
