//! # bestscan-core
//!
//! Core library for the bestscan recent-top-plays collector.
//!
//! This crate provides:
//! - Cohort discovery from ranking pages
//! - Scoring-service lookups (best scores, profiles, maps)
//! - Time-window filtering and modifier decoding
//! - The batched aggregation pipeline
//! - Export formats and result sinks

pub mod api;
pub mod cohort;
pub mod error;
pub mod export;
pub mod model;
pub mod mods;
pub mod pipeline;
pub mod prelude;
pub mod sink;
pub mod window;

pub use api::{DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT, OsuApi, ScoreService};
pub use cohort::{CohortDiscovery, DEFAULT_RANKINGS_BASE, RankingDirectory, WebRankingDirectory};
pub use error::{EnrichmentOperation, Error, Result};
pub use export::{ExportFormat, JsonExporter, TsvExporter};
pub use model::{GameMode, MapMetadata, PlayerId, PlayerProfile, RawScore, ResultRow};
pub use mods::{Mod, Mods};
pub use pipeline::{
    Pipeline, PipelineConfig, PipelineConfigBuilder, PlayerFailure, RunReport, ScoreStats,
    TimestampPolicy,
};
pub use sink::{DEFAULT_INSERT_POSITION, ResultSink, SheetFile, WriterSink};
pub use window::{TimeWindow, in_window, parse_score_timestamp};
