use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TableShapeError;

pub type Row = Vec<String>;

/// A table exactly as grouped by the extractor. Body rows are not checked
/// against the header until the table is materialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub header: Row,
    pub rows: Vec<Row>,
}

impl RawTable {
    pub fn new(header: Row, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn check_shape(&self, table_index: usize) -> Result<(), TableShapeError> {
        let expected = self.header.len();
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            Some((row_index, row)) => Err(TableShapeError {
                table_index,
                row_index,
                expected,
                found: row.len(),
            }),
            None => Ok(()),
        }
    }

    pub fn materialize(&self, table_index: usize) -> Result<Table, TableShapeError> {
        self.check_shape(table_index)?;
        Ok(Table {
            columns: self.header.clone(),
            rows: self.rows.clone(),
        })
    }
}

/// A shape-checked table: every row has one cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.columns.iter().position(|column| column == name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// One JSON object per row keyed by column name. A repeated column name
    /// keeps the rightmost value.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row)
                    .map(|(column, cell)| (column.clone(), Value::String(cell.clone())))
                    .collect::<Map<String, Value>>()
            })
            .collect()
    }
}

/// Every table recovered from one block of text, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSet {
    pub tables: Vec<RawTable>,
}

impl TableSet {
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawTable> {
        self.tables.iter()
    }

    pub fn push(&mut self, table: RawTable) {
        self.tables.push(table);
    }

    pub fn materialize_all(&self) -> Result<Vec<Table>, TableShapeError> {
        self.tables
            .iter()
            .enumerate()
            .map(|(index, table)| table.materialize(index))
            .collect()
    }

    /// Materializes every well-formed table and collects the shape errors of
    /// the rest.
    pub fn materialize_partial(&self) -> (Vec<Table>, Vec<TableShapeError>) {
        let mut tables = Vec::with_capacity(self.tables.len());
        let mut errors = Vec::new();

        for (index, table) in self.tables.iter().enumerate() {
            match table.materialize(index) {
                Ok(table) => tables.push(table),
                Err(err) => errors.push(err),
            }
        }

        (tables, errors)
    }
}

impl<'a> IntoIterator for &'a TableSet {
    type Item = &'a RawTable;
    type IntoIter = std::slice::Iter<'a, RawTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

impl FromIterator<RawTable> for TableSet {
    fn from_iter<I: IntoIterator<Item = RawTable>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

/// Response body of the dashboard's infer endpoint: an info string, the
/// record lists of each table and the column names of each table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferPayload {
    pub info: String,
    pub data: Vec<Vec<Map<String, Value>>>,
    pub cols: Vec<Vec<String>>,
}

impl InferPayload {
    pub fn from_tables(info: impl Into<String>, tables: &[Table]) -> Self {
        Self {
            info: info.into(),
            data: tables.iter().map(Table::to_records).collect(),
            cols: tables.iter().map(|table| table.columns().to_vec()).collect(),
        }
    }

    pub fn failure(info: impl Into<String>) -> Self {
        Self {
            info: info.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn check_shape_names_first_offending_row() {
        let table = RawTable::new(
            row(&["Year", "Revenue"]),
            vec![row(&["2021", "100"]), row(&["2022", "120", "9"]), row(&["2023"])],
        );

        let err = table.check_shape(3).expect_err("row 1 is too wide");
        assert_eq!(
            err,
            TableShapeError {
                table_index: 3,
                row_index: 1,
                expected: 2,
                found: 3,
            }
        );
        assert_eq!(
            err.to_string(),
            "table 3: body row 1 has 3 cells but the header has 2"
        );
    }

    #[test]
    fn header_only_table_materializes_without_rows() {
        let table = RawTable::new(row(&["Year", "Revenue"]), Vec::new());
        let materialized = table.materialize(0).expect("no body rows to mismatch");
        assert_eq!(materialized.columns(), &row(&["Year", "Revenue"])[..]);
        assert!(materialized.rows().is_empty());
        assert!(materialized.to_records().is_empty());
    }

    #[test]
    fn column_lookup_returns_cells_in_row_order() {
        let table = RawTable::new(
            row(&["Year", "Revenue"]),
            vec![row(&["2021", "100"]), row(&["2022", "120"])],
        )
        .materialize(0)
        .expect("well formed");

        assert_eq!(table.column("Revenue"), Some(vec!["100", "120"]));
        assert_eq!(table.column("Growth"), None);
    }

    #[test]
    fn records_are_keyed_by_column_name() {
        let table = RawTable::new(row(&["Year", "Revenue"]), vec![row(&["2021", "100"])])
            .materialize(0)
            .expect("well formed");

        let records = table.to_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Year"], Value::String("2021".to_string()));
        assert_eq!(records[0]["Revenue"], Value::String("100".to_string()));
    }

    #[test]
    fn duplicate_columns_keep_rightmost_value() {
        let table = RawTable::new(row(&["Year", "Year"]), vec![row(&["2021", "2022"])])
            .materialize(0)
            .expect("well formed");

        let records = table.to_records();
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0]["Year"], Value::String("2022".to_string()));
    }

    #[test]
    fn materialize_partial_keeps_valid_tables_and_reports_the_rest() {
        let set: TableSet = vec![
            RawTable::new(row(&["A", "B"]), vec![row(&["1", "2"])]),
            RawTable::new(row(&["A", "B"]), vec![row(&["1"])]),
            RawTable::new(row(&["C"]), vec![row(&["3"])]),
        ]
        .into_iter()
        .collect();

        let (tables, errors) = set.materialize_partial();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].columns(), &row(&["C"])[..]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].table_index, 1);
        assert_eq!(errors[0].found, 1);

        let err = set.materialize_all().expect_err("second table is malformed");
        assert_eq!(err.table_index, 1);
    }

    #[test]
    fn infer_payload_serializes_records_and_columns() {
        let table = RawTable::new(row(&["Year", "Growth"]), vec![row(&["2021", "5"])])
            .materialize(0)
            .expect("well formed");

        let payload = InferPayload::from_tables("summary", &[table]);
        let json = serde_json::to_value(&payload).expect("serialize payload");
        assert_eq!(
            json,
            serde_json::json!({
                "info": "summary",
                "data": [[{ "Year": "2021", "Growth": "5" }]],
                "cols": [["Year", "Growth"]],
            })
        );
    }

    #[test]
    fn failure_payload_is_empty() {
        let payload = InferPayload::failure("download failed");
        assert_eq!(payload.info, "download failed");
        assert!(payload.data.is_empty());
        assert!(payload.cols.is_empty());
    }
}
