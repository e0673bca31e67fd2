pub mod check;
pub mod config;
pub mod extract;

use std::path::Path;

use anyhow::{Context, Result};
use gentables::{ExtractConfig, TableExtractor};
use tracing::info;

pub(crate) fn load_extractor(config_path: Option<&Path>) -> Result<TableExtractor> {
    let config = match config_path {
        Some(path) => {
            let config = ExtractConfig::load_from_path(path)?
                .with_context(|| format!("config file not found: {}", path.display()))?;
            info!(path = %path.display(), "loaded extract config");
            config
        }
        None => ExtractConfig::default(),
    };

    TableExtractor::new(config).context("failed to prepare table extractor")
}
