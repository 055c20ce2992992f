use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};

use super::ResultSink;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::model::ResultRow;

/// Streams rendered rows to any async writer (stdout by default).
///
/// There is no sheet to insert into, so the position is ignored.
pub struct WriterSink<W> {
    writer: W,
    format: Box<dyn ExportFormat + Send + Sync>,
}

impl WriterSink<Stdout> {
    pub fn stdout(format: Box<dyn ExportFormat + Send + Sync>) -> Self {
        Self::new(tokio::io::stdout(), format)
    }
}

impl<W> WriterSink<W> {
    pub fn new(writer: W, format: Box<dyn ExportFormat + Send + Sync>) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Header line (if the format has one), then one line per row
    fn render(&self, rows: &[ResultRow]) -> String {
        let mut output = String::new();
        if let Some(header) = self.format.header() {
            output.push_str(&header);
            output.push('\n');
        }
        for row in rows {
            output.push_str(&self.format.format_row(row));
            output.push('\n');
        }
        output
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ResultSink for WriterSink<W> {
    async fn write_rows(&mut self, rows: &[ResultRow], _position: usize) -> Result<usize> {
        let output = self.render(rows);
        self.writer.write_all(output.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(rows.len())
    }

    fn sink_type(&self) -> &'static str {
        "writer"
    }
}
