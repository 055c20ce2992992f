//! Rendering result rows as text.

mod json;
mod tsv;

use crate::model::ResultRow;

pub use json::{JsonExporter, format_json_entry};
pub use tsv::{TsvExporter, format_tsv_header, format_tsv_row};

/// Line-oriented rendering of [`ResultRow`]s, one line per row
pub trait ExportFormat {
    /// Column header line, `None` for self-describing formats
    fn header(&self) -> Option<String>;

    fn format_row(&self, row: &ResultRow) -> String;
}
