use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use super::ResultSink;
use crate::error::{Error, Result};
use crate::export::{format_tsv_header, format_tsv_row};
use crate::model::ResultRow;

/// Tab-separated file treated as a spreadsheet.
///
/// Rows are inserted, not appended: existing lines at and below the target
/// position move down. A missing file starts with a header row.
#[derive(Debug, Clone)]
pub struct SheetFile {
    path: PathBuf,
}

impl SheetFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_lines(&self) -> Result<Vec<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(content.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Sheet {:?} not found, starting a new one", self.path);
                Ok(vec![format_tsv_header()])
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Insert `new_lines` so the first lands on 1-based row `position`
fn splice_lines(lines: &mut Vec<String>, new_lines: Vec<String>, position: usize) {
    let index = position.saturating_sub(1).min(lines.len());
    let below = lines.split_off(index);
    lines.extend(new_lines);
    lines.extend(below);
}

#[async_trait]
impl ResultSink for SheetFile {
    async fn write_rows(&mut self, rows: &[ResultRow], position: usize) -> Result<usize> {
        if position == 0 {
            return Err(Error::InvalidConfig(
                "sheet rows are 1-based, insert position must be at least 1".to_string(),
            ));
        }

        let mut lines = self.load_lines().await?;
        splice_lines(&mut lines, rows.iter().map(format_tsv_row).collect(), position);

        let mut content = lines.join("\n");
        content.push('\n');
        tokio::fs::write(&self.path, content).await?;

        info!(
            "Inserted {} rows into {:?} at row {}",
            rows.len(),
            self.path,
            position
        );
        Ok(rows.len())
    }

    fn sink_type(&self) -> &'static str {
        "sheet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlayerId;
    use tempfile::tempdir;

    fn row(player: &str) -> ResultRow {
        ResultRow {
            player: PlayerId::new(player),
            pp: 100.0,
            date: "2022-08-24 18:03:11".to_string(),
            replay_available: true,
            score_link: "link".to_string(),
            map: "A - B".to_string(),
            difficulty: "Hard".to_string(),
            mods: "NM".to_string(),
            country_rank: Some(1),
            global_rank: Some(2),
            total_pp: Some(3.0),
        }
    }

    fn first_cells(content: &str) -> Vec<String> {
        content
            .lines()
            .map(|l| l.split('\t').next().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_splice_lines_clamps_position() {
        let mut lines = vec!["h".to_string(), "x".to_string()];
        splice_lines(&mut lines, vec!["a".to_string()], 10);
        assert_eq!(lines, vec!["h", "x", "a"]);

        let mut lines = vec!["h".to_string()];
        splice_lines(&mut lines, vec!["a".to_string(), "b".to_string()], 1);
        assert_eq!(lines, vec!["a", "b", "h"]);
    }

    #[tokio::test]
    async fn test_new_sheet_gets_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.tsv");
        let mut sheet = SheetFile::new(&path);

        let written = sheet.write_rows(&[row("a"), row("b")], 2).await.unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first_cells(&content), vec!["player", "a", "b"]);
    }

    #[tokio::test]
    async fn test_insert_pushes_existing_rows_down() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.tsv");
        let mut sheet = SheetFile::new(&path);

        sheet.write_rows(&[row("old")], 2).await.unwrap();
        sheet.write_rows(&[row("new1"), row("new2")], 2).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            first_cells(&content),
            vec!["player", "new1", "new2", "old"]
        );
    }

    #[tokio::test]
    async fn test_zero_position_rejected() {
        let dir = tempdir().unwrap();
        let mut sheet = SheetFile::new(dir.path().join("scores.tsv"));
        assert!(matches!(
            sheet.write_rows(&[row("a")], 0).await,
            Err(Error::InvalidConfig(_))
        ));
    }
}
