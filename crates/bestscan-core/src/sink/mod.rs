//! Result sinks.
//!
//! A sink receives the ordered rows of a run and a 1-based sheet row
//! position for the first inserted row.

mod sheet;
mod writer;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::ResultRow;

pub use sheet::SheetFile;
pub use writer::WriterSink;

/// Row position right below a single header row
pub const DEFAULT_INSERT_POSITION: usize = 2;

/// Destination for aggregated rows
#[async_trait]
pub trait ResultSink: Send {
    /// Persist `rows` in order, the first one landing on sheet row `position`.
    ///
    /// Returns the number of rows written.
    async fn write_rows(&mut self, rows: &[ResultRow], position: usize) -> Result<usize>;

    /// Get sink type for logging
    fn sink_type(&self) -> &'static str;
}
