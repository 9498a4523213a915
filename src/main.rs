//! str-fixtures: writes the `str` sample table as `str.parquet` and as a
//! single-batch Arrow IPC file `str.arrow`.
//!
//! Usage: `str-fixtures [config.json]`

use std::path::PathBuf;
use std::process::ExitCode;

// Default fixture contents and file names
mod constants;

// Optional JSON overrides
mod config;

// Error handling
mod error;

// Parquet / Arrow IPC encoding and checks
mod data;

// Step timing
mod perf;

mod pipeline;

use config::FixtureConfig;
use constants::logging::DEFAULT_FILTER;
use error::Result;

fn load_config() -> Result<FixtureConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            FixtureConfig::load(&path)
        }
        None => Ok(FixtureConfig::default()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .init();

    match load_config().and_then(|config| pipeline::run(&config)) {
        Ok(report) => {
            log::info!("generated {}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
