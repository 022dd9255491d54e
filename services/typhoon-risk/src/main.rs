//! Typhoon risk command-line tool.
//!
//! - `raster`: load a raw global grid, canonicalise it and query it
//! - `claim`: run one parametric claim simulation
//! - `track`: fetch a forecast track from the tracker API
//!
//! Results go to stdout as JSON; logs go to stderr.

mod claim;
mod raster;
mod track;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "typhoon-risk")]
#[command(about = "Typhoon raster queries, parametric claim simulation and track fetch")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true, env = "LOG_JSON")]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Canonicalise a raw grid file and query it
    Raster {
        /// RawGrid JSON file (`{name, data, params}`)
        #[arg(short, long)]
        input: PathBuf,

        /// Latitude to look up
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude to look up
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Canonical row to look up
        #[arg(long, requires = "col", allow_hyphen_values = true)]
        row: Option<i64>,

        /// Canonical column to look up
        #[arg(long, requires = "row", allow_hyphen_values = true)]
        col: Option<i64>,

        /// Write the renderer descriptor to this file
        #[arg(long)]
        descriptor: Option<PathBuf>,
    },

    /// Run one claim simulation
    Claim {
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Forecast intensity: level5-6, level7-8 or level9-10
        #[arg(long)]
        level: Option<claim_sim::TyphoonLevel>,

        /// The forecast track hits the insured region
        #[arg(long)]
        impact: bool,

        /// Forecast lead time: oneWeek or twoWeeks
        #[arg(long)]
        predict_time: Option<claim_sim::PredictTime>,

        /// Step manually instead of on the timer
        #[arg(long)]
        debug: bool,

        /// Claim configuration YAML (defaults come from the environment)
        #[arg(short, long, env = "CLAIM_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Fetch a forecast track
    Track {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Index of the initial forecast time
        #[arg(long, default_value = "0")]
        time_index: usize,

        /// Tracker API base URL
        #[arg(long, env = "TRACKER_API_URL")]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_json);

    info!(command = ?args.command, "Starting typhoon-risk");

    match args.command {
        Command::Raster {
            input,
            lat,
            lon,
            row,
            col,
            descriptor,
        } => raster::run(raster::RasterArgs {
            input,
            coordinate: lat.zip(lon),
            cell: row.zip(col),
            descriptor,
        }),
        Command::Claim {
            lat,
            lon,
            level,
            impact,
            predict_time,
            debug,
            config,
        } => {
            claim::run(claim::ClaimArgs {
                lat,
                lon,
                level,
                impact,
                predict_time,
                debug,
                config,
            })
            .await
        }
        Command::Track {
            lat,
            lon,
            time_index,
            api_url,
        } => track::run(lat, lon, time_index, api_url).await,
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Print `value` to stdout as pretty JSON.
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
