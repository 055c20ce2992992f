use serde::{Deserialize, Serialize};

use super::de;

/// One play from a player's best scores, as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawScore {
    #[serde(deserialize_with = "de::number")]
    pub beatmap_id: u64,
    #[serde(deserialize_with = "de::number")]
    pub score_id: u64,
    /// Missing for unranked plays, treated as zero
    #[serde(default, deserialize_with = "de::optional_number")]
    pub pp: Option<f64>,
    /// Submission time in the service's `YYYY-MM-DD HH:MM:SS` UTC format
    pub date: String,
    #[serde(default, deserialize_with = "de::flag")]
    pub replay_available: bool,
    #[serde(rename = "enabled_mods", deserialize_with = "de::number")]
    pub mods: u32,
}

impl RawScore {
    pub fn pp(&self) -> f64 {
        self.pp.unwrap_or(0.0)
    }
}

/// Player standing at the time of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    #[serde(rename = "pp_country_rank", default, deserialize_with = "de::optional_number")]
    pub country_rank: Option<u32>,
    #[serde(rename = "pp_rank", default, deserialize_with = "de::optional_number")]
    pub global_rank: Option<u32>,
    #[serde(rename = "pp_raw", default, deserialize_with = "de::optional_number")]
    pub total_pp: Option<f64>,
}

/// Beatmap difficulty metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapMetadata {
    pub artist: String,
    pub title: String,
    /// Difficulty name
    #[serde(rename = "version")]
    pub difficulty: String,
}

impl MapMetadata {
    /// "artist - title"
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}
