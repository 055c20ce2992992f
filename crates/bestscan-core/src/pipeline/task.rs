//! Per-player aggregation task.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::cache::MapCache;
use super::config::TimestampPolicy;
use super::report::{ScoreStats, TaskState};
use crate::api::ScoreService;
use crate::error::{Error, Result};
use crate::model::{GameMode, MapMetadata, PlayerId, RawScore, ResultRow};
use crate::window::{TimeWindow, in_window};

/// Shared, read-only state of one run
pub(crate) struct TaskContext {
    pub service: Arc<dyn ScoreService>,
    pub window: TimeWindow,
    pub mode: GameMode,
    pub policy: TimestampPolicy,
    pub cache: Option<MapCache>,
}

impl TaskContext {
    /// Returns the map and whether it came from the cache
    async fn lookup_map(&self, map_id: u64) -> Result<(MapMetadata, bool)> {
        if let Some(map) = self.cache.as_ref().and_then(|cache| cache.get(map_id)) {
            return Ok((map, true));
        }
        let map = self.service.fetch_map(map_id).await?;
        if let Some(cache) = &self.cache {
            cache.insert(map_id, map.clone());
        }
        Ok((map, false))
    }
}

/// Result of one player task plus the counters gathered until it ended
pub(crate) struct PlayerOutcome {
    pub stats: ScoreStats,
    pub result: Result<Vec<ResultRow>>,
}

fn transition(player: &PlayerId, state: TaskState) {
    debug!("Player {}: {}", player, state);
}

/// Run one player through fetch, filter and enrichment.
///
/// Any lookup failure fails the whole task, so a player contributes either
/// all of its qualifying rows or none.
pub(crate) async fn run_player(ctx: Arc<TaskContext>, player: PlayerId) -> PlayerOutcome {
    let mut stats = ScoreStats::default();
    let result = aggregate_player(&ctx, &player, &mut stats).await;
    match &result {
        Ok(_) => transition(&player, TaskState::Done),
        Err(_) => transition(&player, TaskState::Failed),
    }
    PlayerOutcome { stats, result }
}

async fn aggregate_player(
    ctx: &Arc<TaskContext>,
    player: &PlayerId,
    stats: &mut ScoreStats,
) -> Result<Vec<ResultRow>> {
    transition(player, TaskState::Pending);

    let (scores, profile) = tokio::try_join!(
        async {
            let scores = ctx.service.fetch_best_scores(player).await?;
            transition(player, TaskState::ScoresFetched);
            Ok::<_, Error>(scores)
        },
        async {
            let profile = ctx.service.fetch_profile(player).await?;
            transition(player, TaskState::ProfileFetched);
            Ok::<_, Error>(profile)
        },
    )?;

    stats.seen = scores.len();
    let qualifying = filter_scores(ctx, player, scores, stats)?;
    stats.qualifying = qualifying.len();

    if qualifying.is_empty() {
        return Ok(Vec::new());
    }

    transition(player, TaskState::Enriching);
    let profile = Arc::new(profile);
    let mut lookups = JoinSet::new();
    for (index, score) in qualifying.into_iter().enumerate() {
        let ctx = Arc::clone(ctx);
        let profile = Arc::clone(&profile);
        let player = player.clone();
        lookups.spawn(async move {
            let (map, cached) = ctx.lookup_map(score.beatmap_id).await?;
            let row = ResultRow::assemble(&player, ctx.mode, &score, &profile, &map);
            Ok::<_, Error>((index, cached, row))
        });
    }

    let mut indexed = Vec::with_capacity(lookups.len());
    while let Some(joined) = lookups.join_next().await {
        let (index, cached, row) = joined.map_err(|e| Error::TaskAborted {
            player: player.to_string(),
            reason: e.to_string(),
        })??;
        if cached {
            stats.map_cache_hits += 1;
        } else {
            stats.map_lookups += 1;
        }
        indexed.push((index, row));
    }
    indexed.sort_by_key(|(index, _)| *index);

    Ok(indexed.into_iter().map(|(_, row)| row).collect())
}

/// Keep the scores inside the window, in service order
fn filter_scores(
    ctx: &TaskContext,
    player: &PlayerId,
    scores: Vec<RawScore>,
    stats: &mut ScoreStats,
) -> Result<Vec<RawScore>> {
    let mut qualifying = Vec::new();
    for score in scores {
        match in_window(&score.date, &ctx.window) {
            Ok(true) => qualifying.push(score),
            Ok(false) => stats.outside_window += 1,
            Err(e) => match ctx.policy {
                TimestampPolicy::Skip => {
                    warn!(
                        "Player {}: dropping score {}: {}",
                        player, score.score_id, e
                    );
                    stats.unparseable += 1;
                }
                TimestampPolicy::FailPlayer => return Err(e),
            },
        }
    }
    Ok(qualifying)
}
