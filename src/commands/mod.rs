//! Pipeline driver for stitcher.
//!
//! Routes a raw argument vector through interpretation, planning, and
//! execution, printing the human-facing status lines along the way.


use crate::cli::{self, ParseOutcome};
use crate::config::{Config, ConfigError};
use crate::error::{Result, StitchError};
use crate::executor::{self, JobResult};
use crate::plan;
use crate::stitch::{Mode, StitchRequest};
use std::ffi::OsString;

/// Run one stitcher invocation.
///
/// Help is printed and treated as success. The configuration is only loaded
/// once the arguments describe actual work, so `help` and usage errors are
/// reported even when an environment override is broken. Usage and input
/// errors are returned before any job runs; job failures are returned after
/// every job has run.
pub fn dispatch<I, F>(args: I, load_config: F) -> Result<()>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    F: FnOnce() -> std::result::Result<Config, ConfigError>,
{
    let args = cli::decode_args(args)?;
    let request = match cli::parse(&args) {
        Ok(request) => request,
        Err(ParseOutcome::ShowHelp) => {
            cli::print_help();
            return Ok(());
        }
        Err(ParseOutcome::InvalidArguments(reason)) => return Err(reason.into()),
    };

    let config = load_config()?;
    tracing::debug!(?request, "parsed arguments");
    stitch(&request, &config)
}

fn stitch(request: &StitchRequest, config: &Config) -> Result<()> {
    announce(request);
    let jobs = plan::plan(request)?;
    if jobs.is_empty() {
        println!("No subfolders with .png files found, nothing to stitch");
        return Ok(());
    }

    let results = executor::execute(jobs, config);
    summarize(&results)
}

fn announce(request: &StitchRequest) {
    match request.mode {
        Mode::AllSubdirectories { .. } => {
            println!("{} stitching of all subfolders...", request.direction)
        }
        Mode::ExplicitFiles(_) => {
            println!("{} stitching of specified files...", request.direction)
        }
    }
}

fn summarize(results: &[JobResult]) -> Result<()> {
    let total = results.len();
    let failed = results.iter().filter(|r| !r.is_success()).count();
    for result in results.iter().filter(|r| !r.is_success()) {
        tracing::debug!(output = %result.job().output.display(), "job failed");
    }
    tracing::debug!(total, failed, "all jobs finished");

    if failed == 0 {
        Ok(())
    } else {
        Err(StitchError::JobsFailed { failed, total })
    }
}
