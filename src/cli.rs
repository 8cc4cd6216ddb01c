use clap::Parser;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::command::{OutputMode, parse_query_file};
use crate::engine::{Engine, EngineError, RunOptions};
use crate::frontend::InfluxClient;
use crate::shared::config::Settings;
use crate::shared::datetime::TimeZoneSelector;

const INPUT_FORMAT_HELP: &str = "\
Input file layout (one item per line):
  1. bucket name
  2. start date, inclusive   (YYYY-MM-DD, YYYY-MM-DD HH:MM[:SS] or RFC 3339)
  3. end date, exclusive
  4. interval in minutes     (may be blank with --mode mp)
  5+ trend names             (blank lines ignored, duplicates collapsed)

In tsv mode every sample is attributed to the grid interval that starts at
or before it (walk-back alignment), so a sample at 00:29 with a 30 minute
interval lands on the 00:00 row. When several samples share an interval
the first one received is shown.

Connection settings come from INFLUX_HOST, INFLUX_TOKEN and INFLUX_ORG_ID
(or INFLUX_ORG).";

#[derive(Debug, Parser)]
#[command(name = "mp_influx", version)]
#[command(about = "Tabulate InfluxDB trends on a fixed time grid")]
#[command(after_help = INPUT_FORMAT_HELP)]
pub struct Args {
    /// Query file; read from stdin when omitted
    pub file: Option<PathBuf>,

    /// Output format: tsv (grid) or mp (per-trend points)
    #[arg(short, long)]
    pub mode: Option<OutputMode>,

    /// UTC or an IANA zone such as Europe/Amsterdam
    #[arg(short = 'z', long)]
    pub timezone: Option<TimeZoneSelector>,

    /// Trends per remote query
    #[arg(short, long)]
    pub batch_size: Option<NonZeroUsize>,

    /// Batches fetched at the same time
    #[arg(long)]
    pub max_concurrent_batches: Option<NonZeroUsize>,

    /// Configuration file (defaults to $MP_INFLUX_CONFIG or ./mp_influx.toml)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    /// Command line values take precedence over configuration.
    pub fn apply_to(&self, settings: &mut Settings) {
        let engine = &mut settings.engine;
        if let Some(mode) = self.mode {
            engine.output = mode;
        }
        if let Some(zone) = self.timezone {
            engine.timezone = zone;
        }
        if let Some(size) = self.batch_size {
            engine.batch_size = size;
        }
        if let Some(n) = self.max_concurrent_batches {
            engine.max_concurrent_batches = n;
        }
    }
}

pub async fn read_input(file: Option<&Path>) -> Result<String, EngineError> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|source| EngineError::ReadInput {
                source_name: path.display().to_string(),
                source,
            }),
        None => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .map_err(|source| EngineError::ReadInput {
                    source_name: "<stdin>".to_string(),
                    source,
                })?;
            Ok(input)
        }
    }
}

/// Parse the query, fetch every batch from InfluxDB and render the table.
pub async fn run(args: &Args, settings: &Settings) -> Result<String, EngineError> {
    let input = read_input(args.file.as_deref()).await?;
    let options = RunOptions::from(&settings.engine);
    let spec = parse_query_file(&input, options.mode, &options.zone)?;
    let credentials = settings.influx.credentials()?;
    debug!(target: "mp_influx::cli", host = %credentials.host, "Resolved InfluxDB credentials");

    let client = InfluxClient::new(credentials, settings.influx.request_timeout_secs);
    let table = Engine::new(client, options).run(&spec).await?;
    Ok(table.to_string())
}
