//! In-process scoring service for pipeline tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::ScoreService;
use crate::error::{EnrichmentOperation, Error, Result};
use crate::model::{MapMetadata, PlayerId, PlayerProfile, RawScore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallEvent {
    pub operation: EnrichmentOperation,
    /// Player id, or map id for map lookups
    pub key: String,
    /// False when the call starts, true when it returns
    pub finished: bool,
}

#[derive(Clone, Default)]
pub struct CallLog {
    events: Arc<Mutex<Vec<CallEvent>>>,
}

impl CallLog {
    fn push(&self, operation: EnrichmentOperation, key: &str, finished: bool) {
        self.events.lock().unwrap().push(CallEvent {
            operation,
            key: key.to_string(),
            finished,
        });
    }

    pub fn log(&self) -> Vec<CallEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn map_fetches(&self) -> Vec<u64> {
        self.log()
            .into_iter()
            .filter(|e| e.operation == EnrichmentOperation::Map && !e.finished)
            .map(|e| e.key.parse().unwrap())
            .collect()
    }

    pub fn profile_fetches(&self) -> usize {
        self.log()
            .iter()
            .filter(|e| e.operation == EnrichmentOperation::Profile && !e.finished)
            .count()
    }
}

#[derive(Default)]
pub struct FakeService {
    scores: HashMap<String, Vec<RawScore>>,
    /// `None` makes the profile lookup fail
    profiles: HashMap<String, Option<PlayerProfile>>,
    maps: HashMap<u64, MapMetadata>,
    player_delays: HashMap<String, Duration>,
    map_delays: HashMap<u64, Duration>,
    calls: CallLog,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> CallLog {
        self.calls.clone()
    }

    pub fn with_player(mut self, id: &str, scores: Vec<RawScore>, profile: PlayerProfile) -> Self {
        self.scores.insert(id.to_string(), scores);
        self.profiles.insert(id.to_string(), Some(profile));
        self
    }

    pub fn with_failing_profile(mut self, id: &str, scores: Vec<RawScore>) -> Self {
        self.scores.insert(id.to_string(), scores);
        self.profiles.insert(id.to_string(), None);
        self
    }

    pub fn with_map(mut self, id: u64, map: MapMetadata) -> Self {
        self.maps.insert(id, map);
        self
    }

    pub fn with_player_delay(mut self, id: &str, delay: Duration) -> Self {
        self.player_delays.insert(id.to_string(), delay);
        self
    }

    pub fn with_map_delay(mut self, id: u64, delay: Duration) -> Self {
        self.map_delays.insert(id, delay);
        self
    }

    async fn delay(&self, delay: Option<&Duration>) {
        if let Some(delay) = delay {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl ScoreService for FakeService {
    async fn fetch_best_scores(&self, player: &PlayerId) -> Result<Vec<RawScore>> {
        let op = EnrichmentOperation::BestScores;
        self.calls.push(op, player.as_str(), false);
        self.delay(self.player_delays.get(player.as_str())).await;
        let result = self
            .scores
            .get(player.as_str())
            .cloned()
            .ok_or_else(|| Error::enrichment(op, player.as_str(), "HTTP 404"));
        self.calls.push(op, player.as_str(), true);
        result
    }

    async fn fetch_profile(&self, player: &PlayerId) -> Result<PlayerProfile> {
        let op = EnrichmentOperation::Profile;
        self.calls.push(op, player.as_str(), false);
        self.delay(self.player_delays.get(player.as_str())).await;
        let result = self
            .profiles
            .get(player.as_str())
            .cloned()
            .flatten()
            .ok_or_else(|| Error::enrichment(op, player.as_str(), "HTTP 500"));
        self.calls.push(op, player.as_str(), true);
        result
    }

    async fn fetch_map(&self, map_id: u64) -> Result<MapMetadata> {
        let op = EnrichmentOperation::Map;
        let key = map_id.to_string();
        self.calls.push(op, &key, false);
        self.delay(self.map_delays.get(&map_id)).await;
        let result = self
            .maps
            .get(&map_id)
            .cloned()
            .ok_or_else(|| Error::enrichment(op, &key, "empty response"));
        self.calls.push(op, &key, true);
        result
    }
}

pub fn score(beatmap_id: u64, score_id: u64, date: &str, mods: u32) -> RawScore {
    RawScore {
        beatmap_id,
        score_id,
        pp: Some(100.0),
        date: date.to_string(),
        replay_available: false,
        mods,
    }
}

pub fn profile(country_rank: u32, global_rank: u32, total_pp: f64) -> PlayerProfile {
    PlayerProfile {
        country_rank: Some(country_rank),
        global_rank: Some(global_rank),
        total_pp: Some(total_pp),
    }
}

pub fn map(artist: &str, title: &str, difficulty: &str) -> MapMetadata {
    MapMetadata {
        artist: artist.to_string(),
        title: title.to_string(),
        difficulty: difficulty.to_string(),
    }
}
