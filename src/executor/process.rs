//! Compositing tool runner.
//!
//! The tool is launched directly (no shell) with the job's working directory.
//! Its stdout and stderr are inherited so its own diagnostics reach the user.

use crate::config::ToolCommand;
use crate::stitch::StitchJob;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Why a job's tool invocation failed.
#[derive(Error, Debug)]
pub enum JobError {
    /// The tool could not be started at all.
    #[error("failed to execute {program}: {source} (is ImageMagick installed?)")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but exited unsuccessfully. `code` is `None` when the
    /// process was terminated by a signal.
    #[error("{program} exited with {}", describe_code(.code))]
    ExitStatus { program: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Full argument vector for `job`, tool program first.
pub fn tool_argv(tool: &ToolCommand, job: &StitchJob) -> Vec<String> {
    let mut argv = Vec::with_capacity(1 + tool.args.len() + job.inputs.len() + 3);
    argv.push(tool.program.clone());
    argv.extend(tool.args.iter().cloned());
    argv.extend(job.command_args());
    argv
}

/// The command line for `job`, quoted the way a shell would need it.
pub fn render_command(tool: &ToolCommand, job: &StitchJob) -> String {
    shell_words::join(tool_argv(tool, job))
}

/// Invoke the compositing tool for `job` and wait for it to exit.
pub fn run_tool(tool: &ToolCommand, job: &StitchJob) -> Result<(), JobError> {
    tracing::debug!(
        cwd = %job.workdir.display(),
        command = %render_command(tool, job),
        "invoking compositing tool"
    );

    let status = Command::new(&tool.program)
        .args(&tool.args)
        .args(job.command_args())
        .current_dir(&job.workdir)
        .stdin(Stdio::null())
        .status()
        .map_err(|source| JobError::Launch {
            program: tool.program.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(JobError::ExitStatus {
            program: tool.program.clone(),
            code: status.code(),
        })
    }
}
