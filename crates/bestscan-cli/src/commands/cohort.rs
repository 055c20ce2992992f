//! Cohort command: list the players a run would scan.

use anyhow::{Context, Result};
use bestscan_core::{CohortDiscovery, PlayerId, WebRankingDirectory};

use crate::config::CohortSettings;

pub async fn discover(settings: &CohortSettings) -> Result<Vec<PlayerId>> {
    let directory = WebRankingDirectory::new(
        settings.rankings_base.clone(),
        settings.mode,
        settings.request_timeout,
    )
    .context("Failed to create ranking page client")?;

    CohortDiscovery::new(directory)
        .discover(settings.pages, &settings.region)
        .await
        .context("Failed to fetch users from the ranking pages")
}

pub async fn run(settings: &CohortSettings) -> Result<()> {
    let cohort = discover(settings).await?;
    for (rank, player) in cohort.iter().enumerate() {
        println!("{}\t{}", rank + 1, player);
    }
    eprintln!("{} players ({} pages, {})", cohort.len(), settings.pages, settings.region);
    Ok(())
}
