//! Runtime configuration for stitcher.
//!
//! There is no config file: every setting has a default and can be overridden
//! through an environment variable.
//!
//! | Variable          | Meaning                                     | Default                 |
//! |-------------------|---------------------------------------------|-------------------------|
//! | `STITCHER_MAGICK` | compositing tool command line (shell words) | `magick`                |
//! | `STITCHER_JOBS`   | worker threads for batch mode               | available parallelism   |
//! | `STITCHER_LOG`    | tracing filter (falls back to `RUST_LOG`)   | `warn`                  |

mod env;
mod model;


pub use model::{Config, DEFAULT_LOG_FILTER, ToolCommand};

use thiserror::Error;

/// An environment override that could not be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STITCHER_MAGICK is empty; set it to the compositing tool command, e.g. 'magick'")]
    EmptyTool,

    #[error("failed to parse STITCHER_MAGICK '{value}': {reason}")]
    UnparseableTool { value: String, reason: String },

    #[error("STITCHER_JOBS must be a positive integer, got '{0}'")]
    InvalidJobs(String),
}
