use crate::config::ExtractConfig;
use crate::model::Row;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// No cells survive filtering; ends the table in progress.
    Boundary,
    /// Markdown divider such as `---|:---:`; carries no data.
    Ruler,
    Row(Row),
}

pub fn classify_line(line: &str, config: &ExtractConfig) -> LineKind {
    // Prose without the delimiter never contributes cells.
    if !line.contains(config.cell_delimiter) {
        return LineKind::Boundary;
    }

    let cells = split_cells(line, config.cell_delimiter);
    match cells.first() {
        None => LineKind::Boundary,
        Some(first) if config.is_ruler_start(first) => LineKind::Ruler,
        Some(_) => LineKind::Row(cells),
    }
}

fn split_cells(line: &str, delimiter: char) -> Row {
    line.split(delimiter)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
