use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_STRIP_CHARS: &str = "'$(),%";
pub const DEFAULT_CELL_DELIMITER: char = '|';
pub const DEFAULT_RULER_PREFIXES: &str = "-:";

/// Numeric coercion rules applied while extracting tables.
///
/// Every field is optional in the on-disk JSON form; missing fields fall back
/// to the defaults, which reproduce the stock behavior exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Characters removed from the whole block before it is split into lines.
    pub strip_chars: String,
    pub cell_delimiter: char,
    /// A row whose first cell starts with one of these is a markdown ruler.
    pub ruler_prefixes: String,
    /// Replace `-` with `0` in body cells before numeric extraction.
    pub dash_as_zero: bool,
    /// Reduce body cells to their leading numeric run.
    pub numeric_body: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            strip_chars: DEFAULT_STRIP_CHARS.to_string(),
            cell_delimiter: DEFAULT_CELL_DELIMITER,
            ruler_prefixes: DEFAULT_RULER_PREFIXES.to_string(),
            dash_as_zero: true,
            numeric_body: true,
        }
    }
}

impl ExtractConfig {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ExtractConfig =
            serde_json::from_slice(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let write_error = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        let mut data = serde_json::to_vec_pretty(self).map_err(ConfigError::Serialize)?;
        data.push(b'\n');
        fs::write(path, data).map_err(write_error)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_delimiter == '\n' || self.cell_delimiter == '\r' {
            return Err(ConfigError::Invalid(
                "cell delimiter cannot be a line break".to_string(),
            ));
        }

        if self.strip_chars.contains(self.cell_delimiter) {
            return Err(ConfigError::Invalid(format!(
                "cell delimiter {:?} is also listed in strip_chars",
                self.cell_delimiter
            )));
        }

        if self.ruler_prefixes.contains(self.cell_delimiter) {
            return Err(ConfigError::Invalid(format!(
                "cell delimiter {:?} is also listed in ruler_prefixes",
                self.cell_delimiter
            )));
        }

        if self.strip_chars.contains(['\n', '\r']) {
            return Err(ConfigError::Invalid(
                "strip_chars cannot contain line breaks".to_string(),
            ));
        }

        Ok(())
    }

    /// Character class matching every strip character, or `None` when nothing
    /// is stripped.
    pub fn strip_pattern(&self) -> Result<Option<Regex>, ConfigError> {
        if self.strip_chars.is_empty() {
            return Ok(None);
        }

        let class = self
            .strip_chars
            .chars()
            .map(|ch| regex::escape(&ch.to_string()))
            .collect::<String>();
        let pattern = Regex::new(&format!("[{class}]"))?;
        Ok(Some(pattern))
    }

    pub fn is_ruler_start(&self, cell: &str) -> bool {
        cell.chars()
            .next()
            .map(|ch| self.ruler_prefixes.contains(ch))
            .unwrap_or(false)
    }
}
