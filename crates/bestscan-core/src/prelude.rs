//! Prelude module for convenient imports
//!
//! ```ignore
//! use bestscan_core::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Pipeline: `Pipeline`, `PipelineConfig`, `RunReport`
//! - Lookups: `ScoreService`, `RankingDirectory`, `CohortDiscovery`
//! - Data: `PlayerId`, `RawScore`, `ResultRow`, `TimeWindow`
//! - Output: `ResultSink`, `ExportFormat`
//! - Error handling: `Error`, `Result`

pub use crate::api::{OsuApi, ScoreService};
pub use crate::cohort::{CohortDiscovery, RankingDirectory, WebRankingDirectory};
pub use crate::error::{Error, Result};
pub use crate::export::ExportFormat;
pub use crate::model::{GameMode, PlayerId, RawScore, ResultRow};
pub use crate::pipeline::{Pipeline, PipelineConfig, RunReport};
pub use crate::sink::ResultSink;
pub use crate::window::TimeWindow;
