//! Core stitching vocabulary: direction, parsed request, and planned jobs.

mod job;

pub use job::{JobOrigin, StitchJob};

use std::fmt;

/// Extension (without the dot) of the only raster format the tool stitches.
pub const IMAGE_EXTENSION: &str = "png";

/// Token the compositing tool understands as "reverse the input order".
pub const REVERSE_TOKEN: &str = "-reverse";

/// Axis along which input images are concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Stacked top to bottom.
    Vertical,
    /// Placed side by side.
    Horizontal,
}

impl Direction {
    /// Parse the leading direction token (`-v` / `-h`).
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "-v" => Some(Direction::Vertical),
            "-h" => Some(Direction::Horizontal),
            _ => None,
        }
    }

    /// Compositing-mode token passed to the external tool.
    pub fn mode_token(self) -> &'static str {
        match self {
            Direction::Vertical => "-append",
            Direction::Horizontal => "+append",
        }
    }

    /// Whether input order is reversed when no `-r` flag is given.
    ///
    /// Horizontal strips read right to left, so they default to reversed.
    pub fn default_reverse(self) -> bool {
        self == Direction::Horizontal
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Vertical => write!(f, "Vertical"),
            Direction::Horizontal => write!(f, "Horizontal"),
        }
    }
}

/// What set of inputs an invocation stitches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Stitch exactly these files, in this order, into one output.
    ExplicitFiles(Vec<String>),
    /// Stitch every qualifying subdirectory of the working directory,
    /// one output per subdirectory named `{prefix}{subdir}.png`.
    AllSubdirectories { output_prefix: String },
}

/// Fully parsed intent of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchRequest {
    pub direction: Direction,
    pub reverse_order: bool,
    pub mode: Mode,
    /// Explicit output base name; only consulted in `ExplicitFiles` mode.
    pub output_name: Option<String>,
}
