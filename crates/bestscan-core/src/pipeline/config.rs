use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Error, Result};
use crate::model::GameMode;

pub const DEFAULT_BATCH_SIZE: usize = 20;
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(1);

/// What to do with a score whose date cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TimestampPolicy {
    /// Drop the score, keep processing the player's other scores
    #[default]
    Skip,
    /// Fail the whole player task
    FailPlayer,
}

/// Configuration for the aggregation pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Player tasks launched together before waiting
    pub batch_size: usize,
    /// Pause between two batches
    pub cooldown: Duration,
    /// Ruleset used for score links
    pub mode: GameMode,
    /// Share map lookups between scores of the same run
    pub map_cache: bool,
    pub timestamp_policy: TimestampPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            cooldown: DEFAULT_COOLDOWN,
            mode: GameMode::default(),
            map_cache: true,
            timestamp_policy: TimestampPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration builder
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::InvalidConfig(
                "batch size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for PipelineConfig
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigBuilder {
    batch_size: Option<usize>,
    cooldown: Option<Duration>,
    mode: Option<GameMode>,
    map_cache: Option<bool>,
    timestamp_policy: Option<TimestampPolicy>,
}

impl PipelineConfigBuilder {
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }

    pub fn cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = Some(cooldown);
        self
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Enable or disable the per-run map cache
    pub fn map_cache(mut self, enabled: bool) -> Self {
        self.map_cache = Some(enabled);
        self
    }

    pub fn timestamp_policy(mut self, policy: TimestampPolicy) -> Self {
        self.timestamp_policy = Some(policy);
        self
    }

    /// Build the configuration
    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            batch_size: self.batch_size.unwrap_or(default.batch_size),
            cooldown: self.cooldown.unwrap_or(default.cooldown),
            mode: self.mode.unwrap_or(default.mode),
            map_cache: self.map_cache.unwrap_or(default.map_cache),
            timestamp_policy: self.timestamp_policy.unwrap_or(default.timestamp_policy),
        }
    }
}
