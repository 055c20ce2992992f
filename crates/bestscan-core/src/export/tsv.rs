//! TSV export format implementation

use crate::model::{RESULT_COLUMNS, ResultRow};

use super::ExportFormat;

/// TSV (Tab-Separated Values) exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

impl ExportFormat for TsvExporter {
    fn header(&self) -> Option<String> {
        Some(format_tsv_header())
    }

    fn format_row(&self, row: &ResultRow) -> String {
        format_tsv_row(row)
    }
}

pub fn format_tsv_header() -> String {
    RESULT_COLUMNS.join("\t")
}

/// Tabs and newlines inside a cell would break the row, so they become spaces
pub fn format_tsv_row(row: &ResultRow) -> String {
    row.cells()
        .iter()
        .map(|cell| sanitize_cell(cell))
        .collect::<Vec<_>>()
        .join("\t")
}

fn sanitize_cell(cell: &str) -> String {
    cell.replace(['\t', '\n', '\r'], " ")
}
