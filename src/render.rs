use crate::model::{RawTable, TableSet};

/// Joins each row with ` | ` and separates tables with one blank line. No
/// ruler is written, so extracting the result again yields the same tables
/// as long as no body cell was reduced to an empty string.
pub fn to_pipe_text(tables: &TableSet) -> String {
    tables
        .iter()
        .map(|table| {
            std::iter::once(&table.header)
                .chain(table.rows.iter())
                .map(|row| row.join(" | "))
                .collect::<Vec<String>>()
                .join("\n")
        })
        .collect::<Vec<String>>()
        .join("\n\n")
}

/// `(table, body row)` positions whose empty cells `to_pipe_text` cannot
/// represent: the empty cells vanish on re-extraction, and a row with no
/// other cells reads back as a boundary.
pub fn lossy_pipe_rows(tables: &TableSet) -> Vec<(usize, usize)> {
    tables
        .iter()
        .enumerate()
        .flat_map(|(table_index, table)| {
            table
                .rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.iter().any(String::is_empty))
                .map(move |(row_index, _)| (table_index, row_index))
        })
        .collect()
}

pub fn table_to_markdown(table: &RawTable) -> String {
    let col_count = std::iter::once(&table.header)
        .chain(table.rows.iter())
        .map(|row| row.len())
        .max()
        .unwrap_or(1)
        .max(1);
    let pad = |row: &[String]| {
        let mut current = row.to_vec();
        current.resize(col_count, String::new());
        current
    };

    let mut lines = Vec::<String>::with_capacity(table.rows.len() + 2);
    lines.push(format!("| {} |", pad(&table.header).join(" | ")));
    lines.push(format!(
        "| {} |",
        (0..col_count)
            .map(|_| "---")
            .collect::<Vec<&str>>()
            .join(" | ")
    ));

    for row in &table.rows {
        lines.push(format!("| {} |", pad(row).join(" | ")));
    }

    lines.join("\n")
}

pub fn table_to_csv(table: &RawTable) -> String {
    std::iter::once(&table.header)
        .chain(table.rows.iter())
        .map(|row| {
            row.iter()
                .map(|cell| escape_csv_cell(cell))
                .collect::<Vec<String>>()
                .join(",")
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn escape_csv_cell(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn pipe_text_separates_tables_with_blank_line() {
        let tables: TableSet = vec![
            RawTable::new(row(&["Year", "Revenue"]), vec![row(&["2021", "100"])]),
            RawTable::new(row(&["Year"]), Vec::new()),
        ]
        .into_iter()
        .collect();

        assert_eq!(to_pipe_text(&tables), "Year | Revenue\n2021 | 100\n\nYear");
    }

    #[test]
    fn pipe_text_of_empty_set_is_empty() {
        assert_eq!(to_pipe_text(&TableSet::default()), "");
    }

    #[test]
    fn lossy_pipe_rows_lists_body_rows_with_empty_cells() {
        let tables: TableSet = vec![
            RawTable::new(row(&["", "B"]), vec![row(&["1", "2"]), row(&["", ""])]),
            RawTable::new(row(&["C", "D"]), vec![row(&["3", ""]), row(&["4", "5"])]),
        ]
        .into_iter()
        .collect();

        assert_eq!(lossy_pipe_rows(&tables), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn empty_body_row_changes_table_structure_on_reextraction() {
        let tables = crate::extract_tables("A | B\nN/A | N/A\n1 | 2");
        assert_eq!(tables.tables[0].rows[0], row(&["", ""]));
        assert_eq!(lossy_pipe_rows(&tables), vec![(0, 0)]);

        let reparsed = crate::extract_tables(&to_pipe_text(&tables));
        assert_eq!(reparsed.len(), 2);
        assert!(reparsed.tables[0].rows.is_empty());
        assert_eq!(reparsed.tables[1].header, row(&["1", "2"]));
    }

    #[test]
    fn markdown_pads_short_rows_to_widest_row() {
        let table = RawTable::new(
            row(&["Year", "Revenue"]),
            vec![row(&["2021"]), row(&["2022", "120", "x"])],
        );

        assert_eq!(
            table_to_markdown(&table),
            "| Year | Revenue |  |\n\
             | --- | --- | --- |\n\
             | 2021 |  |  |\n\
             | 2022 | 120 | x |"
        );
    }

    #[test]
    fn csv_quotes_cells_with_separators_and_quotes() {
        let table = RawTable::new(
            row(&["Name", "Note"]),
            vec![row(&["a,b", "say \"hi\""])],
        );

        assert_eq!(
            table_to_csv(&table),
            "Name,Note\n\"a,b\",\"say \"\"hi\"\"\""
        );
    }
}
