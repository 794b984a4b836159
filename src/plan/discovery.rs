//! Discovery of subdirectories worth stitching.

use super::PlanError;
use crate::stitch::IMAGE_EXTENSION;
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::Path;

/// Matches file names carrying the recognized image extension.
///
/// Matching is case-sensitive: `page.PNG` is not an image.
#[derive(Debug, Clone)]
pub struct ImageMatcher {
    matcher: GlobMatcher,
}

impl ImageMatcher {
    pub fn new() -> Result<Self, globset::Error> {
        let glob = Glob::new(&format!("*.{}", IMAGE_EXTENSION))?;
        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }

    /// True if the final component of `path` has the image extension.
    pub fn is_image(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.matcher.is_match(Path::new(name)))
    }
}

/// Names of the immediate subdirectories of `root` that contain at least one
/// image file, sorted by name.
///
/// Non-directory entries are never qualifying. Subdirectories that cannot be
/// read, or whose names are not valid UTF-8, are skipped with a warning.
pub fn qualifying_subdirectories(
    root: &Path,
    matcher: &ImageMatcher,
) -> Result<Vec<String>, PlanError> {
    let entries = fs::read_dir(root).map_err(|source| PlanError::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PlanError::ReadDir {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(path = %path.display(), "skipping subdirectory with non UTF-8 name");
            continue;
        };

        match contains_image(&path, matcher) {
            Ok(true) => names.push(name),
            Ok(false) => tracing::debug!(subdir = %name, "no images, skipping"),
            Err(e) => {
                tracing::warn!(subdir = %name, error = %e, "cannot read subdirectory, skipping")
            }
        }
    }

    names.sort();
    Ok(names)
}

fn contains_image(dir: &Path, matcher: &ImageMatcher) -> std::io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && matcher.is_image(&path) {
            return Ok(true);
        }
    }
    Ok(false)
}
