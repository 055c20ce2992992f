use std::ops::AddAssign;

use strum::{Display, IntoStaticStr};

use crate::error::Error;
use crate::model::{PlayerId, ResultRow};

/// Lifecycle of one player task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum TaskState {
    Pending,
    ScoresFetched,
    ProfileFetched,
    Enriching,
    Done,
    Failed,
}

/// Score counters of player tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreStats {
    /// Best scores returned by the service
    pub seen: usize,
    pub outside_window: usize,
    /// Dropped because the date could not be parsed
    pub unparseable: usize,
    pub qualifying: usize,
    /// Map lookups that went to the service
    pub map_lookups: usize,
    pub map_cache_hits: usize,
}

impl AddAssign for ScoreStats {
    fn add_assign(&mut self, other: Self) {
        self.seen += other.seen;
        self.outside_window += other.outside_window;
        self.unparseable += other.unparseable;
        self.qualifying += other.qualifying;
        self.map_lookups += other.map_lookups;
        self.map_cache_hits += other.map_cache_hits;
    }
}

#[derive(Debug)]
pub struct PlayerFailure {
    pub player: PlayerId,
    pub error: Error,
}

/// Everything a run produced
#[derive(Debug, Default)]
pub struct RunReport {
    /// Rows in cohort order, then score order
    pub rows: Vec<ResultRow>,
    pub batches: usize,
    pub players: usize,
    pub succeeded: usize,
    /// Players whose task succeeded without a qualifying score
    pub without_rows: Vec<PlayerId>,
    pub failures: Vec<PlayerFailure>,
    /// Counters from every task that returned, failed ones included up to
    /// the point they failed
    pub stats: ScoreStats,
}

impl RunReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// One-line summary for the end of a run
    pub fn summary(&self) -> String {
        format!(
            "{} rows from {} players ({} without qualifying scores, {} failed, {} scores dropped for bad dates)",
            self.rows.len(),
            self.players,
            self.without_rows.len(),
            self.failed(),
            self.stats.unparseable
        )
    }
}
