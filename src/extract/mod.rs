//! Recovers pipe-delimited tables from free text produced by a text
//! generator.
//!
//! The pipeline is: strip noise characters from the whole block, split it
//! into lines, classify each line as a boundary, a markdown ruler or a row,
//! coerce body rows to leading numeric tokens, and group rows into tables at
//! every boundary and at the end of input.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::ExtractConfig;
use crate::error::ConfigError;
use crate::model::TableSet;

mod assemble;
mod classify;
mod cleanse;
mod normalize;

pub use assemble::TableAssembler;
pub use classify::{LineKind, classify_line};
pub use cleanse::cleanse;
pub use normalize::{leading_numeric, normalize_body_cell, normalize_body_row};

static DEFAULT_EXTRACTOR: LazyLock<TableExtractor> = LazyLock::new(|| {
    TableExtractor::new(ExtractConfig::default()).expect("default extract config is valid")
});

/// Extracts tables using the default coercion rules.
pub fn extract_tables(text: &str) -> TableSet {
    DEFAULT_EXTRACTOR.extract(text)
}

/// A validated config with its strip pattern compiled once. Extraction keeps
/// no state between calls.
#[derive(Debug, Clone)]
pub struct TableExtractor {
    config: ExtractConfig,
    strip_pattern: Option<Regex>,
}

impl TableExtractor {
    pub fn new(config: ExtractConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let strip_pattern = config.strip_pattern()?;
        Ok(Self {
            config,
            strip_pattern,
        })
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    pub fn extract(&self, text: &str) -> TableSet {
        let lines = cleanse(text, self.strip_pattern.as_ref());
        let mut assembler = TableAssembler::new(&self.config);
        for line in &lines {
            assembler.push_line(line);
        }

        let rulers_skipped = assembler.rulers_skipped();
        let tables = assembler.finish();
        debug!(
            lines = lines.len(),
            rulers_skipped,
            tables = tables.len(),
            "extracted tables"
        );
        tables
    }
}
