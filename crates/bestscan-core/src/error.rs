use serde::Serialize;
use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// Scoring-service lookup that produced an [`Error::Enrichment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentOperation {
    BestScores,
    Profile,
    Map,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to discover cohort (page {page}): {reason}")]
    Discovery { page: u32, reason: String },

    #[error("Enrichment failed ({operation} for {identifier}): {cause}")]
    Enrichment {
        operation: EnrichmentOperation,
        identifier: String,
        cause: String,
    },

    #[error("Invalid score timestamp {value:?}: {source}")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Task for player {player} aborted: {reason}")]
    TaskAborted { player: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn enrichment(
        operation: EnrichmentOperation,
        identifier: impl Into<String>,
        cause: impl ToString,
    ) -> Self {
        Error::Enrichment {
            operation,
            identifier: identifier.into(),
            cause: cause.to_string(),
        }
    }

    pub(crate) fn discovery(page: u32, reason: impl Into<String>) -> Self {
        Error::Discovery {
            page,
            reason: reason.into(),
        }
    }

    /// Check if this error only fails a single player (or score) rather than the whole run
    pub fn is_contained(&self) -> bool {
        matches!(
            self,
            Error::Enrichment { .. } | Error::TimestampParse { .. } | Error::TaskAborted { .. }
        )
    }
}
