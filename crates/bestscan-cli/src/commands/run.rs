//! Run command: cohort discovery, aggregation and persistence.

use std::sync::Arc;

use anyhow::{Context, Result};
use bestscan_core::{OsuApi, Pipeline, ResultSink, SheetFile, WriterSink};
use tracing::{info, warn};

use crate::config::RunSettings;

pub async fn run(settings: RunSettings) -> Result<()> {
    info!("Fetching users from ranking pages...");
    let cohort = super::cohort::discover(&settings.cohort).await?;
    if cohort.is_empty() {
        warn!("Ranking pages listed no players");
    }

    let service = OsuApi::new(
        settings.api_base.clone(),
        settings.api_key.clone(),
        settings.cohort.mode,
        settings.cohort.request_timeout,
    )?;
    let pipeline = Pipeline::new(Arc::new(service), settings.window, settings.pipeline.clone())?;

    info!("Scanning top scores...");
    let report = pipeline.run(&cohort).await;
    info!("{}", report.summary());
    for failure in &report.failures {
        warn!("  {}: {}", failure.player, failure.error);
    }

    let mut sink: Box<dyn ResultSink> = match &settings.output {
        Some(path) => Box::new(SheetFile::new(path)),
        None => Box::new(WriterSink::stdout(settings.format.exporter())),
    };
    let written = sink
        .write_rows(&report.rows, settings.insert_at)
        .await
        .with_context(|| format!("Failed to write rows ({})", sink.sink_type()))?;

    info!("Wrote {} rows", written);
    Ok(())
}
