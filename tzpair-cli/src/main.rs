mod commands;
mod logging;
mod render;
mod zones;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use tzpair_core::config::TzPairConfig;

#[derive(Parser)]
#[command(name = "tzpair")]
#[command(about = "Convert wall-clock times between a pair of time zones")]
struct Cli {
    /// Log debug output to stderr (same as TZPAIR_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read this config file instead of ~/.config/tzpair/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a wall-clock time from the source zone to the target zone
    Convert {
        /// Date/time in the source zone (e.g., "2025-03-20T15:00"); prompts if omitted
        datetime: Option<String>,

        /// Source zone (IANA name, city, fixed offset like "+05:30", or "local")
        #[arg(long)]
        from: Option<String>,

        /// Target zone
        #[arg(long)]
        to: Option<String>,

        /// Convert from the target zone to the source zone instead
        #[arg(short, long)]
        reverse: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the current time in both zones
    Now {
        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,
    },
    /// Show UTC offset and DST status
    Status {
        /// Zone to show (repeatable); defaults to the configured pair
        #[arg(short, long)]
        zone: Vec<String>,

        /// Refresh every minute
        #[arg(short, long)]
        watch: bool,
    },
    /// Show config path and configured zones, or change them
    Config {
        /// Set the source zone
        #[arg(long)]
        source: Option<String>,

        /// Set the target zone
        #[arg(long)]
        target: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::setup_logging(cli.verbose).context("Could not set up logging")?;

    let (config_path, config) = match cli.config {
        Some(path) => {
            let config = TzPairConfig::load_from(&path)
                .with_context(|| format!("Could not load config from {}", path.display()))?;
            (path, config)
        }
        None => (TzPairConfig::config_path()?, TzPairConfig::load()?),
    };
    debug!(
        "Configured pair: {} -> {}",
        config.source_zone, config.target_zone
    );

    match cli.command {
        Commands::Convert {
            datetime,
            from,
            to,
            reverse,
            json,
        } => {
            let mut pair = zones::resolve_pair(&config, from.as_deref(), to.as_deref())?;
            if reverse {
                pair.swap();
            }
            commands::convert::run(pair, datetime, json)
        }
        Commands::Now { from, to } => {
            let pair = zones::resolve_pair(&config, from.as_deref(), to.as_deref())?;
            commands::now::run(pair)
        }
        Commands::Status { zone, watch } => {
            let selected = if zone.is_empty() {
                let pair = zones::resolve_pair(&config, None, None)?;
                vec![pair.source, pair.target]
            } else {
                zone.iter()
                    .map(|name| zones::resolve_zone(name))
                    .collect::<Result<Vec<_>>>()?
            };
            commands::status::run(selected, watch)
        }
        Commands::Config { source, target } => {
            if source.is_none() && target.is_none() {
                commands::config::run(&config_path, &config)
            } else {
                commands::config::update(&config_path, config, source, target)
            }
        }
    }
}
