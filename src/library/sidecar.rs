// SPDX-License-Identifier: MPL-2.0
//! Tag sidecar persistence.
//!
//! Each image's tags live in a text file next to it (`photo.jpg` →
//! `photo.txt`), joined by the configured separator. A missing sidecar means
//! an empty tag list; sidecars are rewritten on every mutation so tags are
//! always durable.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the sidecar path for an image file.
#[must_use]
pub fn sidecar_path(image_path: &Path) -> PathBuf {
    image_path.with_extension("txt")
}

/// Reads the tag list for an image.
///
/// A missing sidecar yields an empty list. Tags are split on the separator,
/// trimmed, and empty fragments are dropped.
///
/// # Errors
///
/// Returns [`Error::Tags`] if an existing sidecar cannot be read.
pub fn read_tags(image_path: &Path, separator: &str) -> Result<Vec<String>> {
    let path = sidecar_path(image_path);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Tags(format!("{}: {}", path.display(), e)))?;
    Ok(parse_tags(&content, separator))
}

/// Writes the tag list for an image, replacing any existing sidecar.
///
/// An empty tag list removes the sidecar instead of leaving an empty file
/// behind.
///
/// # Errors
///
/// Returns [`Error::Tags`] if the sidecar cannot be written or removed.
pub fn write_tags(image_path: &Path, tags: &[String], separator: &str) -> Result<()> {
    let path = sidecar_path(image_path);

    if tags.is_empty() {
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| Error::Tags(format!("{}: {}", path.display(), e)))?;
        }
        return Ok(());
    }

    fs::write(&path, tags.join(separator))
        .map_err(|e| Error::Tags(format!("{}: {}", path.display(), e)))
}

/// Splits raw sidecar content into a clean tag list.
///
/// Surrounding whitespace in the separator is ignored so `", "` and `","`
/// parse the same files; a blank separator falls back to a comma.
#[must_use]
pub fn parse_tags(content: &str, separator: &str) -> Vec<String> {
    let separator = match separator.trim() {
        "" => ",",
        trimmed => trimmed,
    };
    content
        .split(separator)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
