use tracing::trace;

use crate::config::ExtractConfig;
use crate::model::{RawTable, Row, TableSet};

use super::classify::{LineKind, classify_line};
use super::normalize::normalize_body_row;

/// Groups classified lines into tables. The first row after a boundary is
/// the header; every later row up to the next boundary is a body row.
#[derive(Debug)]
pub struct TableAssembler<'a> {
    config: &'a ExtractConfig,
    header: Option<Row>,
    body: Vec<Row>,
    tables: TableSet,
    rulers_skipped: usize,
}

impl<'a> TableAssembler<'a> {
    pub fn new(config: &'a ExtractConfig) -> Self {
        Self {
            config,
            header: None,
            body: Vec::new(),
            tables: TableSet::default(),
            rulers_skipped: 0,
        }
    }

    pub fn push_line(&mut self, line: &str) {
        let kind = classify_line(line, self.config);
        self.push(kind);
    }

    pub fn push(&mut self, kind: LineKind) {
        match kind {
            LineKind::Ruler => {
                self.rulers_skipped += 1;
                trace!(table = self.tables.len(), "skipped ruler line");
            }
            LineKind::Boundary => self.flush(),
            LineKind::Row(cells) => {
                if self.header.is_none() {
                    self.header = Some(cells);
                } else {
                    self.body.push(normalize_body_row(cells, self.config));
                }
            }
        }
    }

    pub fn rulers_skipped(&self) -> usize {
        self.rulers_skipped
    }

    /// Closes a trailing table that has no boundary after it.
    pub fn finish(mut self) -> TableSet {
        self.flush();
        self.tables
    }

    fn flush(&mut self) {
        let body = std::mem::take(&mut self.body);
        if let Some(header) = self.header.take() {
            self.tables.push(RawTable::new(header, body));
        }
    }
}
