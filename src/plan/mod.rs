//! Job planning: turn a parsed request into the jobs that fulfil it.
//!
//! Explicit-file requests become exactly one job after every input has been
//! validated; batch requests become one job per qualifying subdirectory of the
//! working directory.

mod discovery;
mod naming;


pub use discovery::{ImageMatcher, qualifying_subdirectories};
pub use naming::{derive_output_name, explicit_output_name};

use crate::stitch::{IMAGE_EXTENSION, JobOrigin, Mode, StitchJob, StitchRequest};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an explicit input was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotFound,
    WrongExtension,
}

/// An explicit input path that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedInput {
    pub path: String,
    pub reason: RejectReason,
}

impl fmt::Display for RejectedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            RejectReason::NotFound => write!(f, "{} (not found)", self.path),
            RejectReason::WrongExtension => {
                write!(f, "{} (not a .{} file)", self.path, IMAGE_EXTENSION)
            }
        }
    }
}

/// Planning failures; all of them abort the run before any job starts.
#[derive(Error, Debug)]
pub enum PlanError {
    /// One or more explicit inputs are missing or not recognized images.
    #[error("Invalid files passed, aborting: {}", join_rejected(.0))]
    InvalidInput(Vec<RejectedInput>),

    /// The working directory could not be listed.
    #[error("failed to list directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image file pattern could not be compiled.
    #[error("invalid image pattern: {0}")]
    Pattern(#[from] globset::Error),
}

fn join_rejected(rejected: &[RejectedInput]) -> String {
    rejected
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plan the request against the current working directory.
pub fn plan(request: &StitchRequest) -> Result<Vec<StitchJob>, PlanError> {
    let root = std::env::current_dir().map_err(|source| PlanError::ReadDir {
        path: PathBuf::from("."),
        source,
    })?;
    plan_in(request, &root)
}

/// Plan the request against `root`, which is also where jobs will run.
pub fn plan_in(request: &StitchRequest, root: &Path) -> Result<Vec<StitchJob>, PlanError> {
    let matcher = ImageMatcher::new()?;

    match &request.mode {
        Mode::AllSubdirectories { output_prefix } => {
            let subdirs = qualifying_subdirectories(root, &matcher)?;
            tracing::debug!(
                root = %root.display(),
                count = subdirs.len(),
                "found qualifying subdirectories"
            );
            Ok(subdirs
                .into_iter()
                .map(|name| subdirectory_job(request, root, output_prefix, name))
                .collect())
        }
        Mode::ExplicitFiles(paths) => {
            validate_inputs(paths, root, &matcher)?;
            let output = match &request.output_name {
                Some(name) => explicit_output_name(name),
                None => derive_output_name(paths),
            };
            Ok(vec![StitchJob {
                inputs: paths.clone(),
                direction: request.direction,
                reverse_order: request.reverse_order,
                output,
                workdir: root.to_path_buf(),
                origin: JobOrigin::Files,
            }])
        }
    }
}

fn subdirectory_job(
    request: &StitchRequest,
    root: &Path,
    output_prefix: &str,
    name: String,
) -> StitchJob {
    StitchJob {
        inputs: vec![format!("{}/*.{}", name, IMAGE_EXTENSION)],
        direction: request.direction,
        reverse_order: request.reverse_order,
        output: PathBuf::from(format!("{}{}.{}", output_prefix, name, IMAGE_EXTENSION)),
        workdir: root.to_path_buf(),
        origin: JobOrigin::Subdirectory(name),
    }
}

/// Check every explicit input, collecting all failures rather than stopping at
/// the first so the user sees the full list.
fn validate_inputs(paths: &[String], root: &Path, matcher: &ImageMatcher) -> Result<(), PlanError> {
    let rejected: Vec<RejectedInput> = paths
        .iter()
        .filter_map(|path| {
            let reason = if !root.join(path).is_file() {
                RejectReason::NotFound
            } else if !matcher.is_image(Path::new(path)) {
                RejectReason::WrongExtension
            } else {
                return None;
            };
            Some(RejectedInput {
                path: path.clone(),
                reason,
            })
        })
        .collect();

    if rejected.is_empty() {
        Ok(())
    } else {
        tracing::debug!(rejected = rejected.len(), "explicit inputs failed validation");
        Err(PlanError::InvalidInput(rejected))
    }
}
