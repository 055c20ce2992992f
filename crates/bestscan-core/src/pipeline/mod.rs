//! Score aggregation pipeline.
//!
//! The orchestrator runs one task per cohort player, in batches:
//!
//! - best scores and profile are fetched concurrently
//! - scores outside the window are dropped before any map lookup
//! - surviving scores are enriched concurrently and turned into rows
//!
//! Task outcomes are collected at batch boundaries and appended in cohort
//! order, so the row order only depends on the cohort and the service's
//! score order.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use bestscan_core::{OsuApi, Pipeline, PipelineConfig, TimeWindow};
//!
//! let service = Arc::new(OsuApi::new(DEFAULT_API_BASE, key, GameMode::Osu, timeout)?);
//! let window = TimeWindow::parse_rfc3339("2022-08-22T00:00:00+03:00", "2022-08-28T00:00:00+03:00")?;
//! let pipeline = Pipeline::new(service, window, PipelineConfig::default())?;
//! let report = pipeline.run(&cohort).await;
//! ```

mod batch;
mod cache;
mod config;
mod report;
mod task;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::ScoreService;
use crate::error::{Error, Result};
use crate::model::PlayerId;
use crate::window::TimeWindow;

pub use batch::{BatchRun, Batcher};
pub use cache::MapCache;
pub use config::{
    DEFAULT_BATCH_SIZE, DEFAULT_COOLDOWN, PipelineConfig, PipelineConfigBuilder, TimestampPolicy,
};
pub use report::{PlayerFailure, RunReport, ScoreStats, TaskState};

use task::{TaskContext, run_player};

pub struct Pipeline {
    service: Arc<dyn ScoreService>,
    window: TimeWindow,
    config: PipelineConfig,
    batcher: Batcher,
}

impl Pipeline {
    pub fn new(
        service: Arc<dyn ScoreService>,
        window: TimeWindow,
        config: PipelineConfig,
    ) -> Result<Self> {
        config.validate()?;
        let batcher = Batcher::new(config.batch_size, config.cooldown)?;
        Ok(Self {
            service,
            window,
            config,
            batcher,
        })
    }

    /// Aggregate the qualifying scores of every cohort player.
    ///
    /// Player failures are contained and reported, they never abort the run.
    pub async fn run(&self, cohort: &[PlayerId]) -> RunReport {
        info!(
            "Scanning best scores of {} players between {} and {} ({} batches of up to {})",
            cohort.len(),
            self.window.start().to_rfc3339(),
            self.window.end().to_rfc3339(),
            self.batcher.batch_count(cohort.len()),
            self.batcher.batch_size()
        );

        let ctx = Arc::new(TaskContext {
            service: Arc::clone(&self.service),
            window: self.window,
            mode: self.config.mode,
            policy: self.config.timestamp_policy,
            cache: self.config.map_cache.then(MapCache::new),
        });

        let run = self
            .batcher
            .run(cohort, |player| run_player(Arc::clone(&ctx), player.clone()))
            .await;

        let mut report = RunReport {
            batches: run.batches,
            players: cohort.len(),
            ..Default::default()
        };

        for (player, outcome) in cohort.iter().zip(run.outcomes) {
            let result = match outcome {
                Some(outcome) => {
                    report.stats += outcome.stats;
                    outcome.result
                }
                None => Err(Error::TaskAborted {
                    player: player.to_string(),
                    reason: "task panicked or was cancelled".to_string(),
                }),
            };
            match result {
                Ok(rows) => {
                    report.succeeded += 1;
                    if rows.is_empty() {
                        report.without_rows.push(player.clone());
                    }
                    report.rows.extend(rows);
                }
                Err(error) => {
                    warn!("Player {} failed: {}", player, error);
                    report.failures.push(PlayerFailure {
                        player: player.clone(),
                        error,
                    });
                }
            }
        }

        info!("Found total of {} scores", report.rows.len());
        report
    }
}
