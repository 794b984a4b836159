//! Argument interpretation for stitcher.
//!
//! The grammar is order-sensitive, so it is scanned by hand rather than
//! declared: a fixed direction token first, then a run of two-character
//! short flags, then the explicit file list.
//!
//! ```text
//! stitcher (-v | -h) [-a] [-r] [-o NAME] [FILE FILE ...]
//! stitcher [help]
//! ```

mod help;

#[cfg(test)]
mod tests;

pub use help::print_help;

use crate::stitch::{Direction, Mode, StitchRequest};
use std::ffi::OsString;
use thiserror::Error;

/// Why an argument vector could not be turned into a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// No direction was given, or `help` was asked for.
    #[error("help requested")]
    ShowHelp,

    /// The arguments were malformed or contradictory.
    #[error(transparent)]
    InvalidArguments(#[from] ArgumentError),
}

/// The specific grammar violation behind `ParseOutcome::InvalidArguments`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("expected -v or -h as the first argument, got '{0}'")]
    UnknownDirection(String),

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("-o requires an output name")]
    MissingOutputValue,

    #[error("-a stitches all subfolders and cannot be combined with {0} explicit file(s)")]
    FilesWithBatch(usize),

    #[error("at least two files are required, got {0}")]
    TooFewFiles(usize),

    #[error("argument '{0}' is not valid UTF-8")]
    NonUtf8(String),
}

/// Convert raw OS arguments to strings, rejecting any that are not UTF-8.
pub fn decode_args<I>(args: I) -> Result<Vec<String>, ArgumentError>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into()
                .into_string()
                .map_err(|raw| ArgumentError::NonUtf8(raw.to_string_lossy().into_owned()))
        })
        .collect()
}

/// Flags seen while scanning, before the file list is validated.
#[derive(Debug, Default)]
struct Flags {
    all_subdirectories: bool,
    toggle_reverse: bool,
    output: Option<String>,
}

/// Parse the program arguments (without the program name) into a request.
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<StitchRequest, ParseOutcome> {
    let direction = match args.first().map(|s| s.as_ref()) {
        None | Some("help") => return Err(ParseOutcome::ShowHelp),
        Some(token) => Direction::from_arg(token)
            .ok_or_else(|| ArgumentError::UnknownDirection(token.to_string()))?,
    };

    let mut flags = Flags::default();
    let mut rest = &args[1..];
    while let Some(token) = rest.first().map(|s| s.as_ref()) {
        if !is_flag_shaped(token) {
            break;
        }
        match token {
            "-a" => {
                flags.all_subdirectories = true;
                rest = &rest[1..];
            }
            "-r" => {
                flags.toggle_reverse = !flags.toggle_reverse;
                rest = &rest[1..];
            }
            "-o" => {
                let value = rest.get(1).ok_or(ArgumentError::MissingOutputValue)?;
                flags.output = Some(value.as_ref().to_string());
                rest = &rest[2..];
            }
            other => return Err(ArgumentError::UnknownFlag(other.to_string()).into()),
        }
    }

    let files: Vec<String> = rest.iter().map(|s| s.as_ref().to_string()).collect();
    let reverse_order = direction.default_reverse() ^ flags.toggle_reverse;

    let (mode, output_name) = if flags.all_subdirectories {
        if !files.is_empty() {
            return Err(ArgumentError::FilesWithBatch(files.len()).into());
        }
        let output_prefix = flags.output.unwrap_or_default();
        (Mode::AllSubdirectories { output_prefix }, None)
    } else {
        if files.len() < 2 {
            return Err(ArgumentError::TooFewFiles(files.len()).into());
        }
        (Mode::ExplicitFiles(files), flags.output)
    };

    Ok(StitchRequest {
        direction,
        reverse_order,
        mode,
        output_name,
    })
}

/// A dash followed by exactly one letter.
fn is_flag_shaped(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-')
        && chars.next().is_some_and(char::is_alphabetic)
        && chars.next().is_none()
}
