//! Stitcher: ImageMagick powered image stitcher for manga or longstrip usage.
//!
//! This is the main entry point for the `stitcher` CLI. It runs the stitching
//! pipeline, loading the environment configuration once the arguments have
//! been accepted, and maps any failure to an exit code.

mod cli;
mod commands;
mod config;
mod error;
mod executor;
mod exit_codes;
mod logging;
mod plan;
mod stitch;

#[cfg(test)]
mod test_support;

use config::{Config, ConfigError};
use error::StitchError;
use plan::PlanError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let load_config = || -> Result<Config, ConfigError> {
        let config = Config::from_env()?;
        logging::init(&config.log_filter);
        Ok(config)
    };

    match commands::dispatch(std::env::args_os().skip(1), load_config) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => fail(&err),
    }
}

/// Print a user-actionable message for `err` and return its exit code.
fn fail(err: &StitchError) -> ExitCode {
    match err {
        StitchError::Usage(_) => {
            println!("{}", err);
            cli::print_help();
        }
        StitchError::Plan(PlanError::InvalidInput(rejected)) => {
            println!("Invalid files passed, aborting");
            for input in rejected {
                println!("  {}", input);
            }
        }
        StitchError::JobsFailed { .. } => eprintln!("{}", err),
        StitchError::Config(_) | StitchError::Plan(_) => eprintln!("Error: {}", err),
    }

    ExitCode::from(err.exit_code() as u8)
}
