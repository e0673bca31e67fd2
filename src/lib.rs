//! Recovers structured tables from the pipe-delimited free text that
//! generative models emit when asked for tabular data.

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod util;

pub use config::ExtractConfig;
pub use error::{ConfigError, TableShapeError};
pub use extract::{TableExtractor, extract_tables};
pub use model::{InferPayload, RawTable, Table, TableSet};
