//! Exit code constants for the stitcher CLI.
//!
//! - 0: Success (including when help was shown)
//! - 1: Usage error (bad arguments, bad configuration)
//! - 2: Input validation failure (missing or non-image input files)
//! - 3: One or more stitching jobs failed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: invalid program arguments or environment configuration.
pub const USER_ERROR: i32 = 1;

/// Input validation failure: an explicit input is missing or not a recognized image.
pub const INPUT_FAILURE: i32 = 2;

/// At least one job's compositing tool invocation failed.
pub const JOB_FAILURE: i32 = 3;
