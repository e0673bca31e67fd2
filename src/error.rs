use std::path::PathBuf;

use thiserror::Error;

/// A body row whose cell count disagrees with its table's header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "table {table_index}: body row {row_index} has {found} cells but the header has {expected}"
)]
pub struct TableShapeError {
    pub table_index: usize,
    pub row_index: usize,
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write config file at {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("invalid strip pattern: {0}")]
    Pattern(#[from] regex::Error),
}
