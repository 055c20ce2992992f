//! Scoring-service lookups.
//!
//! [`ScoreService`] is the I/O boundary of the pipeline. [`OsuApi`] talks
//! to the real service; tests plug in in-process fakes.

mod client;
mod osu;

#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{MapMetadata, PlayerId, PlayerProfile, RawScore};

pub use client::{DEFAULT_REQUEST_TIMEOUT, HttpClient};
pub use osu::{BEST_SCORES_LIMIT, DEFAULT_API_BASE, OsuApi};

/// The three lookups against the scoring service.
///
/// Every call is a single round trip. Failures are reported as
/// [`Error::Enrichment`](crate::Error::Enrichment) and never retried here.
#[async_trait]
pub trait ScoreService: Send + Sync {
    /// Best scores of a player, in the service's ranking order
    async fn fetch_best_scores(&self, player: &PlayerId) -> Result<Vec<RawScore>>;

    async fn fetch_profile(&self, player: &PlayerId) -> Result<PlayerProfile>;

    async fn fetch_map(&self, map_id: u64) -> Result<MapMetadata>;
}
