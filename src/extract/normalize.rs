use crate::config::ExtractConfig;
use crate::model::Row;

/// Longest prefix made only of ASCII digits and `.`.
pub fn leading_numeric(cell: &str) -> &str {
    let end = cell
        .find(|ch: char| !(ch.is_ascii_digit() || ch == '.'))
        .unwrap_or(cell.len());
    &cell[..end]
}

pub fn normalize_body_cell(cell: &str, config: &ExtractConfig) -> String {
    let cell = if config.dash_as_zero {
        cell.replace('-', "0")
    } else {
        cell.to_string()
    };

    if config.numeric_body {
        leading_numeric(&cell).to_string()
    } else {
        cell
    }
}

pub fn normalize_body_row(row: Row, config: &ExtractConfig) -> Row {
    row.into_iter()
        .map(|cell| normalize_body_cell(&cell, config))
        .collect()
}
