//! Output file naming for explicit-file jobs.

use crate::stitch::IMAGE_EXTENSION;
use std::path::{Path, PathBuf, is_separator};

/// Output name derived from the inputs: each input's base name without its
/// extension, joined with `-`, in input order.
///
/// `["dir/a.png", "b.png"]` becomes `a-b.png`.
pub fn derive_output_name<S: AsRef<str>>(inputs: &[S]) -> PathBuf {
    let stem = inputs
        .iter()
        .map(|input| {
            Path::new(input.as_ref())
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join("-");
    PathBuf::from(format!("{}.{}", stem, IMAGE_EXTENSION))
}

/// A user-supplied output name with its extension replaced by the image
/// extension. Any directory part is kept.
///
/// The extension is the text after the last dot of the final component,
/// unless that component is only dots before it (`.hidden`, `..`). The image
/// extension is always appended, so `""` becomes `.png`.
pub fn explicit_output_name(name: &str) -> PathBuf {
    let file_start = name.rfind(is_separator).map_or(0, |i| i + 1);
    let file = &name[file_start..];
    let stem_len = match file.rfind('.') {
        Some(dot) if file[..dot].chars().any(|c| c != '.') => dot,
        _ => file.len(),
    };
    PathBuf::from(format!(
        "{}{}.{}",
        &name[..file_start],
        &file[..stem_len],
        IMAGE_EXTENSION
    ))
}
