//! Job execution.
//!
//! Each job becomes one invocation of the compositing tool. A single job runs
//! on the calling thread; two or more run on a bounded rayon pool and the call
//! returns once every job has finished. A failing job never stops its
//! siblings: failures are collected into the returned results.

mod process;


pub use process::JobError;

use process::run_tool;

use crate::config::{Config, ToolCommand};
use crate::stitch::{JobOrigin, StitchJob};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

/// Terminal state of one job.
#[derive(Debug)]
pub enum JobResult {
    Success { job: StitchJob, output: PathBuf },
    Failure { job: StitchJob, cause: JobError },
}

impl JobResult {
    pub fn is_success(&self) -> bool {
        matches!(self, JobResult::Success { .. })
    }

    pub fn job(&self) -> &StitchJob {
        match self {
            JobResult::Success { job, .. } | JobResult::Failure { job, .. } => job,
        }
    }
}

/// Run every job to completion and return their results in job order.
pub fn execute(jobs: Vec<StitchJob>, config: &Config) -> Vec<JobResult> {
    if jobs.len() <= 1 {
        return run_sequential(jobs, &config.tool);
    }

    let threads = config.jobs.get().min(jobs.len());
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("stitch-worker-{}", i))
        .build();

    match pool {
        Ok(pool) => {
            tracing::debug!(jobs = jobs.len(), threads, "running jobs in parallel");
            pool.install(|| {
                jobs.into_par_iter()
                    .map(|job| run_job(job, &config.tool))
                    .collect()
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to start worker pool, running jobs sequentially");
            run_sequential(jobs, &config.tool)
        }
    }
}

fn run_sequential(jobs: Vec<StitchJob>, tool: &ToolCommand) -> Vec<JobResult> {
    jobs.into_iter().map(|job| run_job(job, tool)).collect()
}

/// Run one job and report its outcome on stdout/stderr.
fn run_job(job: StitchJob, tool: &ToolCommand) -> JobResult {
    let span = tracing::debug_span!("job", output = %job.output.display());
    let _entered = span.enter();

    let started = Instant::now();
    let result = match run_tool(tool, &job) {
        Ok(()) => {
            let output = job.output.clone();
            JobResult::Success { job, output }
        }
        Err(cause) => JobResult::Failure { job, cause },
    };
    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        success = result.is_success(),
        "job finished"
    );

    report(&result);
    result
}

fn report(result: &JobResult) {
    match result {
        JobResult::Success { job, output } => match &job.origin {
            JobOrigin::Subdirectory(_) => {
                let dir = job.source_dir().unwrap_or_default();
                println!(
                    "Folder {} stitched to file {}",
                    dir.display(),
                    output.display()
                );
            }
            JobOrigin::Files => println!("Files stitched to file {}", output.display()),
        },
        JobResult::Failure { job, cause } => {
            eprintln!(
                "Failed to stitch {} to {}: {}",
                job.source(),
                job.output.display(),
                cause
            );
        }
    }
}
