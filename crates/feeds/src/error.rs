use std::path::PathBuf;

use thiserror::Error;

pub type FeedResult<T> = Result<T, FeedError>;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A listing line that could not be decoded (1-based line number).
    #[error("line {line}: failed to decode record: {reason}")]
    Decode { line: usize, reason: String },

    #[error("failed to encode matches: {0}")]
    Encode(String),
}

impl FeedError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
