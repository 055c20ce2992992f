use std::time::Duration;

use reqwest::Client;
use tracing::debug;

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin GET client shared by the scoring-service and ranking-page lookups.
///
/// Does not retry. A non-success status is returned as an error so the
/// caller can contain it.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let user_agent = format!(
            "bestscan/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `<base_url>/<endpoint>` and return the body text.
    ///
    /// Errors never carry the request URL, since query strings may hold
    /// credentials.
    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> reqwest::Result<String> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        response.text().await.map_err(reqwest::Error::without_url)
    }
}
