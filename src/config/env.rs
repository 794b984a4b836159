//! Environment overrides.

use super::ConfigError;
use super::model::{Config, ToolCommand};
use std::num::NonZeroUsize;

pub const TOOL_VAR: &str = "STITCHER_MAGICK";
pub const JOBS_VAR: &str = "STITCHER_JOBS";
pub const LOG_VAR: &str = "STITCHER_LOG";

/// Fallback filter variable honored by most tracing-based tools.
const RUST_LOG_VAR: &str = "RUST_LOG";

impl Config {
    /// Build the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(TOOL_VAR) {
            config.tool = ToolCommand::parse(&value)?;
        }

        if let Some(value) = lookup(JOBS_VAR) {
            config.jobs = value
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidJobs(value.clone()))?;
        }

        if let Some(filter) = lookup(LOG_VAR)
            .or_else(|| lookup(RUST_LOG_VAR))
            .filter(|f| !f.trim().is_empty())
        {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

impl ToolCommand {
    /// Split a command line into program and leading arguments without
    /// invoking a shell.
    pub fn parse(command_line: &str) -> Result<Self, ConfigError> {
        let mut words =
            shell_words::split(command_line).map_err(|e| ConfigError::UnparseableTool {
                value: command_line.to_string(),
                reason: e.to_string(),
            })?;

        if words.is_empty() {
            return Err(ConfigError::EmptyTool);
        }

        let program = words.remove(0);
        Ok(Self {
            program,
            args: words,
        })
    }
}
