//! Cohort discovery.
//!
//! Walks the region's ranking pages in order and collects player ids:
//!
//! - page 1..=N, each fetched through a [`RankingDirectory`]
//! - names in on-page order, normalized by [`normalize_name`]
//!
//! Any page failure is fatal; a partial cohort is never returned.

mod parse;
mod web;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::PlayerId;

pub use parse::{NAME_SEPARATOR, normalize_name, parse_ranking_page};
pub use web::{DEFAULT_RANKINGS_BASE, WebRankingDirectory};

/// Source of ranking pages (HTML documents)
#[async_trait]
pub trait RankingDirectory: Send + Sync {
    /// Fetch one ranking page for a region, pages are 1-based.
    ///
    /// Failures are reported as [`Error::Discovery`] for that page.
    async fn fetch_page(&self, region: &str, page: u32) -> Result<String>;
}

pub struct CohortDiscovery<D> {
    directory: D,
}

impl<D: RankingDirectory> CohortDiscovery<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Collect the players listed on the first `page_count` ranking pages
    pub async fn discover(&self, page_count: u32, region: &str) -> Result<Vec<PlayerId>> {
        if page_count == 0 {
            return Err(Error::InvalidConfig(
                "page count must be at least 1".to_string(),
            ));
        }

        let mut cohort = Vec::new();
        for page in 1..=page_count {
            let html = self.directory.fetch_page(region, page).await?;

            let names = parse_ranking_page(&html)
                .ok_or_else(|| Error::discovery(page, "ranking table not found"))?;
            debug!("Ranking page {} listed {} players", page, names.len());

            cohort.extend(names.into_iter().map(PlayerId::from));
        }

        info!(
            "Discovered {} players from {} ranking pages ({})",
            cohort.len(),
            page_count,
            region
        );
        Ok(cohort)
    }
}
