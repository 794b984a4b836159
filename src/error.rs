//! Error types for the stitcher CLI.
//!
//! Uses thiserror for derive macros. Component errors are defined next to the
//! component that produces them and wrapped here so `main` can map any failure
//! to a single exit code.

use crate::cli::ArgumentError;
use crate::config::ConfigError;
use crate::exit_codes;
use crate::plan::PlanError;
use thiserror::Error;

/// Main error type for a stitcher invocation.
#[derive(Error, Debug)]
pub enum StitchError {
    /// The argument vector did not match the grammar.
    #[error("Invalid program arguments: {0}")]
    Usage(#[from] ArgumentError),

    /// An environment override could not be interpreted.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Planning failed before any job ran.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Every job ran, but some of them failed.
    #[error("{failed} of {total} stitching jobs failed")]
    JobsFailed { failed: usize, total: usize },
}

impl StitchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StitchError::Usage(_) => exit_codes::USER_ERROR,
            StitchError::Config(_) => exit_codes::USER_ERROR,
            StitchError::Plan(_) => exit_codes::INPUT_FAILURE,
            StitchError::JobsFailed { .. } => exit_codes::JOB_FAILURE,
        }
    }
}

/// Result type alias for stitcher operations.
pub type Result<T> = std::result::Result<T, StitchError>;
