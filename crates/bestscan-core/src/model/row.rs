use serde::Serialize;

use super::{GameMode, MapMetadata, PlayerId, PlayerProfile, RawScore};
use crate::mods;

/// Base URL for score pages
pub const SCORE_URL_BASE: &str = "https://osu.ppy.sh/scores";

/// Column names, in cell order
pub const RESULT_COLUMNS: [&str; 11] = [
    "player",
    "pp",
    "date",
    "replay",
    "score",
    "map",
    "difficulty",
    "mods",
    "country_rank",
    "global_rank",
    "total_pp",
];

/// One qualifying play, enriched with map and player data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub player: PlayerId,
    pub pp: f64,
    /// Submission date exactly as reported by the service
    pub date: String,
    pub replay_available: bool,
    /// Spreadsheet hyperlink formula pointing at the score page
    pub score_link: String,
    /// "artist - title"
    pub map: String,
    pub difficulty: String,
    pub mods: String,
    pub country_rank: Option<u32>,
    pub global_rank: Option<u32>,
    pub total_pp: Option<f64>,
}

impl ResultRow {
    pub fn assemble(
        player: &PlayerId,
        mode: GameMode,
        score: &RawScore,
        profile: &PlayerProfile,
        map: &MapMetadata,
    ) -> Self {
        Self {
            player: player.clone(),
            pp: score.pp(),
            date: score.date.clone(),
            replay_available: score.replay_available,
            score_link: score_link(mode, score.score_id),
            map: map.display_name(),
            difficulty: map.difficulty.clone(),
            mods: mods::decode(score.mods),
            country_rank: profile.country_rank,
            global_rank: profile.global_rank,
            total_pp: profile.total_pp,
        }
    }

    /// Cell values in [`RESULT_COLUMNS`] order
    pub fn cells(&self) -> Vec<String> {
        fn opt<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        vec![
            self.player.to_string(),
            self.pp.to_string(),
            self.date.clone(),
            String::from(if self.replay_available { "1" } else { "0" }),
            self.score_link.clone(),
            self.map.clone(),
            self.difficulty.clone(),
            self.mods.clone(),
            opt(self.country_rank),
            opt(self.global_rank),
            opt(self.total_pp),
        ]
    }
}

/// `=HYPERLINK("<score page>","SCORE")`
pub fn score_link(mode: GameMode, score_id: u64) -> String {
    format!(
        "=HYPERLINK(\"{}/{}/{}\",\"SCORE\")",
        SCORE_URL_BASE,
        mode.path_name(),
        score_id
    )
}
