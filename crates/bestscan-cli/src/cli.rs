use std::path::PathBuf;

use bestscan_core::{ExportFormat, GameMode, JsonExporter, TsvExporter};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bestscan")]
#[command(version, about = "Collect recent top plays of a region's best players")]
pub struct Cli {
    /// TOML config file, missing file means defaults
    #[arg(short, long, global = true, default_value = "bestscan.toml")]
    pub config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Discover the cohort, aggregate qualifying scores and write them out
    Run(RunArgs),
    /// Print the discovered cohort
    Cohort(CohortArgs),
    /// Decode modifier bitmasks
    Mods {
        #[arg(required = true)]
        masks: Vec<u32>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CohortArgs {
    /// Region (country) code of the ranking, e.g. BY
    #[arg(short, long, env = "BESTSCAN_REGION")]
    pub region: Option<String>,

    /// Number of ranking pages to read (50 players each)
    #[arg(short, long)]
    pub pages: Option<u32>,

    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<GameMode>,

    /// Base URL of the ranking pages
    #[arg(long)]
    pub rankings_base: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub cohort: CohortArgs,

    #[arg(long, env = "OSU_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the scoring API
    #[arg(long)]
    pub api_base: Option<String>,

    /// Window start, RFC 3339 with offset (e.g. 2022-08-22T00:00:00+03:00),
    /// or wall-clock time when --tz is given (e.g. 2022-08-22T00:00:00)
    #[arg(long)]
    pub from: Option<String>,

    /// Window end, same form as --from
    #[arg(long)]
    pub to: Option<String>,

    /// IANA timezone of wall-clock window bounds (e.g. Europe/Minsk)
    #[arg(long)]
    pub tz: Option<String>,

    /// Players launched per batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Pause between batches in milliseconds
    #[arg(long)]
    pub cooldown_ms: Option<u64>,

    /// Fetch map metadata for every score instead of once per map
    #[arg(long)]
    pub no_map_cache: bool,

    /// Fail a player when one of their score dates cannot be parsed
    #[arg(long)]
    pub strict_timestamps: bool,

    /// Sheet file (TSV) to insert rows into; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 1-based sheet row of the first inserted row
    #[arg(long)]
    pub insert_at: Option<usize>,

    /// Stdout format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn exporter(self) -> Box<dyn ExportFormat + Send + Sync> {
        match self {
            OutputFormat::Tsv => Box::new(TsvExporter),
            OutputFormat::Json => Box::new(JsonExporter),
        }
    }
}

fn parse_mode(value: &str) -> Result<GameMode, String> {
    value
        .parse()
        .map_err(|_| format!("unknown mode {:?} (osu, taiko, fruits, mania)", value))
}
