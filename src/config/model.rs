//! Config struct definitions and defaults.

use std::num::NonZeroUsize;

/// Program name of the default compositing tool (ImageMagick 7).
pub const DEFAULT_TOOL: &str = "magick";

/// Default tracing filter when neither `STITCHER_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// The external compositing command: a program plus leading arguments that
/// come before each job's own arguments (e.g. `gm convert`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

impl Default for ToolCommand {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

/// Settings for one stitcher run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Compositing tool invoked once per job.
    pub tool: ToolCommand,

    /// Worker threads used when more than one job is planned.
    pub jobs: NonZeroUsize,

    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: ToolCommand::default(),
            jobs: default_jobs(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

fn default_jobs() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
