//! JSON export format implementation

use serde_json::{Value as JsonValue, json};

use crate::model::ResultRow;

use super::ExportFormat;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn header(&self) -> Option<String> {
        None
    }

    fn format_row(&self, row: &ResultRow) -> String {
        format_json_entry(row).to_string()
    }
}

pub fn format_json_entry(row: &ResultRow) -> JsonValue {
    json!({
        "player": row.player.as_str(),
        "pp": row.pp,
        "date": row.date,
        "replay_available": row.replay_available,
        "score_link": row.score_link,
        "map": row.map,
        "difficulty": row.difficulty,
        "mods": row.mods,
        "country_rank": row.country_rank,
        "global_rank": row.global_rank,
        "total_pp": row.total_pp
    })
}
