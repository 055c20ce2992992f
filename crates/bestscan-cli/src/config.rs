//! Run configuration: TOML file, overridden by flags and environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use bestscan_core::pipeline::{DEFAULT_BATCH_SIZE, DEFAULT_COOLDOWN};
use bestscan_core::{
    DEFAULT_API_BASE, DEFAULT_INSERT_POSITION, DEFAULT_RANKINGS_BASE, DEFAULT_REQUEST_TIMEOUT,
    GameMode, PipelineConfig, TimeWindow, TimestampPolicy,
};
use serde::Deserialize;
use tracing::debug;

use crate::cli::{CohortArgs, OutputFormat, RunArgs};

/// Contents of `bestscan.toml`, every field optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub rankings_base: Option<String>,
    pub mode: Option<GameMode>,
    pub region: Option<String>,
    pub pages: Option<u32>,
    pub batch_size: Option<usize>,
    pub cooldown_ms: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub map_cache: Option<bool>,
    pub strict_timestamps: Option<bool>,
    pub output: Option<PathBuf>,
    pub insert_at: Option<usize>,
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    pub start: Option<String>,
    pub end: Option<String>,
    /// IANA zone of wall-clock `start`/`end`; RFC 3339 bounds when unset
    pub timezone: Option<String>,
}

impl FileConfig {
    /// Load the config file, a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Config file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read config file {}", path.display()))
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Settings needed to discover a cohort
#[derive(Debug, Clone)]
pub struct CohortSettings {
    pub region: String,
    pub pages: u32,
    pub mode: GameMode,
    pub rankings_base: String,
    pub request_timeout: Duration,
}

impl CohortSettings {
    pub fn resolve(file: &FileConfig, args: &CohortArgs) -> Result<Self> {
        let region = args
            .region
            .clone()
            .or_else(|| file.region.clone())
            .map(|r| r.trim().to_uppercase())
            .filter(|r| !r.is_empty())
            .context("No region specified. Use --region, BESTSCAN_REGION env, or `region` in the config file.")?;

        let pages = args.pages.or(file.pages).unwrap_or(1);
        if pages == 0 {
            bail!("Page count must be at least 1");
        }

        let request_timeout = args
            .timeout_secs
            .or(file.request_timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Ok(Self {
            region,
            pages,
            mode: args.mode.or(file.mode).unwrap_or_default(),
            rankings_base: args
                .rankings_base
                .clone()
                .or_else(|| file.rankings_base.clone())
                .unwrap_or_else(|| DEFAULT_RANKINGS_BASE.to_string()),
            request_timeout,
        })
    }
}

/// Fully validated settings of a `run`
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub cohort: CohortSettings,
    pub api_key: String,
    pub api_base: String,
    pub window: TimeWindow,
    pub pipeline: PipelineConfig,
    pub output: Option<PathBuf>,
    pub insert_at: usize,
    pub format: OutputFormat,
}

impl RunSettings {
    pub fn resolve(file: &FileConfig, args: &RunArgs) -> Result<Self> {
        let cohort = CohortSettings::resolve(file, &args.cohort)?;

        let api_key = args
            .api_key
            .clone()
            .or_else(|| file.api_key.clone())
            .filter(|k| !k.trim().is_empty())
            .context("No API key specified. Use --api-key, OSU_API_KEY env, or `api_key` in the config file.")?;

        let start = args
            .from
            .clone()
            .or_else(|| file.window.start.clone())
            .context("No window start specified. Use --from or `window.start` in the config file.")?;
        let end = args
            .to
            .clone()
            .or_else(|| file.window.end.clone())
            .context("No window end specified. Use --to or `window.end` in the config file.")?;
        let timezone = args.tz.clone().or_else(|| file.window.timezone.clone());
        let window = match timezone.as_deref() {
            Some(zone) => TimeWindow::parse_local(&start, &end, zone)?,
            None => TimeWindow::parse_rfc3339(&start, &end)?,
        };

        let timestamp_policy = if args.strict_timestamps || file.strict_timestamps == Some(true) {
            TimestampPolicy::FailPlayer
        } else {
            TimestampPolicy::Skip
        };

        let pipeline = PipelineConfig::builder()
            .batch_size(args.batch_size.or(file.batch_size).unwrap_or(DEFAULT_BATCH_SIZE))
            .cooldown(
                args.cooldown_ms
                    .or(file.cooldown_ms)
                    .map(Duration::from_millis)
                    .unwrap_or(DEFAULT_COOLDOWN),
            )
            .mode(cohort.mode)
            .map_cache(!args.no_map_cache && file.map_cache.unwrap_or(true))
            .timestamp_policy(timestamp_policy)
            .build();
        pipeline.validate()?;

        let insert_at = args
            .insert_at
            .or(file.insert_at)
            .unwrap_or(DEFAULT_INSERT_POSITION);
        if insert_at == 0 {
            bail!("Insert position is 1-based and must be at least 1");
        }

        Ok(Self {
            cohort,
            api_key,
            api_base: args
                .api_base
                .clone()
                .or_else(|| file.api_base.clone())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            window,
            pipeline,
            output: args.output.clone().or_else(|| file.output.clone()),
            insert_at,
            format: args.format.or(file.format).unwrap_or_default(),
        })
    }
}
