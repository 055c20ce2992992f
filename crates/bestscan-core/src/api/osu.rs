use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{HttpClient, ScoreService};
use crate::error::{EnrichmentOperation, Error, Result};
use crate::model::{GameMode, MapMetadata, PlayerId, PlayerProfile, RawScore};

pub const DEFAULT_API_BASE: &str = "https://osu.ppy.sh/api";

/// Maximum number of best scores the service returns per call
pub const BEST_SCORES_LIMIT: u32 = 100;

/// osu! API v1 client
#[derive(Clone)]
pub struct OsuApi {
    client: HttpClient,
    api_key: String,
    mode: GameMode,
}

impl OsuApi {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        mode: GameMode,
        timeout: Duration,
    ) -> Result<Self> {
        let client = HttpClient::new(base_url, timeout)
            .map_err(|e| Error::InvalidConfig(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            mode,
        })
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    async fn request<T: DeserializeOwned>(
        &self,
        operation: EnrichmentOperation,
        identifier: &str,
        endpoint: &str,
        mut query: Vec<(&str, String)>,
    ) -> Result<T> {
        query.insert(0, ("k", self.api_key.clone()));
        let body = self
            .client
            .get(endpoint, &query)
            .await
            .map_err(|e| Error::enrichment(operation, identifier, e))?;
        parse_body(operation, identifier, &body)
    }

    /// Lookups that answer with a one-element list
    async fn request_first<T: DeserializeOwned>(
        &self,
        operation: EnrichmentOperation,
        identifier: &str,
        endpoint: &str,
        query: Vec<(&str, String)>,
    ) -> Result<T> {
        let items: Vec<T> = self.request(operation, identifier, endpoint, query).await?;
        items
            .into_iter()
            .next()
            .ok_or_else(|| Error::enrichment(operation, identifier, "empty response"))
    }
}

fn parse_body<T: DeserializeOwned>(
    operation: EnrichmentOperation,
    identifier: &str,
    body: &str,
) -> Result<T> {
    // The service reports bad keys and similar problems as {"error": "..."} with status 200
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = map.get("error").and_then(|v| v.as_str()) {
            return Err(Error::enrichment(operation, identifier, message));
        }
    }
    serde_json::from_str(body)
        .map_err(|e| Error::enrichment(operation, identifier, format!("malformed body: {}", e)))
}

#[async_trait]
impl ScoreService for OsuApi {
    async fn fetch_best_scores(&self, player: &PlayerId) -> Result<Vec<RawScore>> {
        self.request(
            EnrichmentOperation::BestScores,
            player.as_str(),
            "get_user_best",
            vec![
                ("u", player.to_string()),
                ("m", self.mode.api_value().to_string()),
                ("limit", BEST_SCORES_LIMIT.to_string()),
                ("type", "string".to_string()),
            ],
        )
        .await
    }

    async fn fetch_profile(&self, player: &PlayerId) -> Result<PlayerProfile> {
        self.request_first(
            EnrichmentOperation::Profile,
            player.as_str(),
            "get_user",
            vec![
                ("u", player.to_string()),
                ("m", self.mode.api_value().to_string()),
                ("type", "string".to_string()),
            ],
        )
        .await
    }

    async fn fetch_map(&self, map_id: u64) -> Result<MapMetadata> {
        let identifier = map_id.to_string();
        self.request_first(
            EnrichmentOperation::Map,
            &identifier,
            "get_beatmaps",
            vec![("b", identifier.clone())],
        )
        .await
    }
}
