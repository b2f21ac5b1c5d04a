use std::io;
use std::process::ExitCode;
use std::time::Instant;

use chrono::Utc;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use galileo_tracker::utils::config::{
    DEFAULT_COORDINATES, DEFAULT_ELEVATION_M, DEFAULT_TLE_URL, ENV_COORDINATES, ENV_ELEVATION,
    ENV_TIME, ENV_URL,
};
use galileo_tracker::utils::time_utils::format_timestamp;
use galileo_tracker::{
    source_from_location, ReportFormat, RunOptions, Sgp4Propagator, Tracker, TrackerConfig,
};

/// Show altitude, azimuth and next rise/set of Galileo satellites
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Observer position as "<longitude>,<latitude>" in degrees (decimal or D:M:S)
    #[arg(short, long, env = ENV_COORDINATES, default_value = DEFAULT_COORDINATES, allow_hyphen_values = true)]
    coordinates: String,

    /// Observer height above the WGS84 ellipsoid in meters
    #[arg(short, long, env = ENV_ELEVATION, default_value_t = DEFAULT_ELEVATION_M, allow_hyphen_values = true)]
    elevation: i32,

    /// Observation time (ISO-8601, UTC unless an offset is given). Defaults to now.
    #[arg(short, long, env = ENV_TIME)]
    time: Option<String>,

    /// Only show satellites above the horizon
    #[arg(short, long)]
    apparent: bool,

    /// Show rise/set times and run diagnostics
    #[arg(short, long)]
    verbose: bool,

    /// TLE feed: http(s) URL, file URL or local path
    #[arg(short, long, env = ENV_URL, default_value = DEFAULT_TLE_URL)]
    url: String,

    /// Write one JSON object per satellite instead of text
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(opts: &Opts) -> galileo_tracker::Result<()> {
    let options = RunOptions {
        apparent_only: opts.apparent,
        verbose: opts.verbose,
        format: if opts.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        },
    };
    let config = TrackerConfig::from_values(
        &opts.coordinates,
        opts.elevation,
        opts.time.as_deref(),
        &opts.url,
        options,
    )?;

    info!(
        longitude_deg = config.observer.longitude_deg,
        latitude_deg = config.observer.latitude_deg,
        elevation_m = config.observer.elevation_m,
        time = %format_timestamp(&config.observer.timestamp),
        source = %config.location,
        "Observer configured"
    );

    let source = source_from_location(&config.location)?;
    let tracker = Tracker::new(config.observer, Sgp4Propagator::default(), config.options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    tracker.run_source(source.as_ref(), &mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let opts = Opts::parse();
    init_logging(opts.verbose);

    let started = Instant::now();
    info!(start = %format_timestamp(&Utc::now()), "Tracking started");

    let result = run(&opts);

    info!(
        end = %format_timestamp(&Utc::now()),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Tracking finished"
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Tracking failed");
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
