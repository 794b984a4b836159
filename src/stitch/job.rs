//! A single unit of stitching work.

use super::{Direction, REVERSE_TOKEN};
use std::fmt;
use std::path::PathBuf;

/// Where a job's inputs came from; used for status reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOrigin {
    /// Files named explicitly on the command line.
    Files,
    /// Every image inside the named subdirectory of the working directory.
    Subdirectory(String),
}

/// One output image produced from an ordered set of inputs.
///
/// Paths in `inputs` and `output` are relative to `workdir`, which is where the
/// compositing tool is launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchJob {
    /// Literal input paths, or a single wildcard pattern expanded by the tool.
    pub inputs: Vec<String>,
    pub direction: Direction,
    pub reverse_order: bool,
    pub output: PathBuf,
    pub workdir: PathBuf,
    pub origin: JobOrigin,
}

impl StitchJob {
    /// Arguments passed to the compositing tool, after the tool's own program
    /// and leading arguments: `inputs... [-reverse] mode output`.
    pub fn command_args(&self) -> Vec<String> {
        let mut args = self.inputs.clone();
        if self.reverse_order {
            args.push(REVERSE_TOKEN.to_string());
        }
        args.push(self.direction.mode_token().to_string());
        args.push(self.output.to_string_lossy().into_owned());
        args
    }

    /// Human-readable description of the job's inputs.
    pub fn source(&self) -> JobSource<'_> {
        JobSource(self)
    }

    /// Directory the job stitches, resolved against the working directory.
    pub fn source_dir(&self) -> Option<PathBuf> {
        match &self.origin {
            JobOrigin::Subdirectory(name) => Some(self.workdir.join(name)),
            JobOrigin::Files => None,
        }
    }
}

/// Display adapter naming a job's inputs.
pub struct JobSource<'a>(&'a StitchJob);

impl fmt::Display for JobSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.source_dir() {
            Some(dir) => write!(f, "folder {}", dir.display()),
            None => write!(f, "files {}", self.0.inputs.join(", ")),
        }
    }
}
