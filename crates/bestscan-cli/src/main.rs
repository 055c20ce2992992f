mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::{CohortSettings, FileConfig, RunSettings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("bestscan={}", level).parse()?)
                .add_directive(format!("bestscan_core={}", level).parse()?),
        )
        .init();

    match cli.command {
        Command::Run(args) => {
            let file = FileConfig::load(&cli.config)?;
            let settings = RunSettings::resolve(&file, &args)?;
            info!(
                "bestscan {} - {} pages of {} ({})",
                env!("CARGO_PKG_VERSION"),
                settings.cohort.pages,
                settings.cohort.region,
                settings.cohort.mode
            );
            commands::run::run(settings).await
        }
        Command::Cohort(args) => {
            let file = FileConfig::load(&cli.config)?;
            let settings = CohortSettings::resolve(&file, &args)?;
            commands::cohort::run(&settings).await
        }
        Command::Mods { masks } => {
            commands::mods::run(&masks);
            Ok(())
        }
    }
}
