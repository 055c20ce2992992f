use std::time::Duration;

use async_trait::async_trait;

use super::RankingDirectory;
use crate::api::HttpClient;
use crate::error::{Error, Result};
use crate::model::GameMode;

pub const DEFAULT_RANKINGS_BASE: &str = "https://osu.ppy.sh/rankings";

/// Ranking directory backed by the public performance ranking pages
#[derive(Clone)]
pub struct WebRankingDirectory {
    client: HttpClient,
    mode: GameMode,
}

impl WebRankingDirectory {
    pub fn new(base_url: impl Into<String>, mode: GameMode, timeout: Duration) -> reqwest::Result<Self> {
        Ok(Self {
            client: HttpClient::new(base_url, timeout)?,
            mode,
        })
    }
}

#[async_trait]
impl RankingDirectory for WebRankingDirectory {
    async fn fetch_page(&self, region: &str, page: u32) -> Result<String> {
        let endpoint = format!("{}/performance", self.mode.path_name());
        self.client
            .get(
                &endpoint,
                &[("country", region.to_string()), ("page", page.to_string())],
            )
            .await
            .map_err(|e| Error::discovery(page, e.to_string()))
    }
}
