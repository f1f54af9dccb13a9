// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent image library: directory scanning, per-image tag
//! lists, sidecar persistence, and tag statistics.
//!
//! Nothing in this module (apart from the decoded-image handle in
//! [`image::ImageData`]) depends on widget types, so the data model is
//! testable without a display.

pub mod cache;
pub mod image;
pub mod list;
pub mod scanner;
pub mod sidecar;
pub mod tag_counter;

use std::path::{Path, PathBuf};

pub use cache::ImageCache;
pub use image::{load_image, ImageData};
pub use list::ImageListModel;
pub use tag_counter::TagCounts;

/// One discovered image file and its current tag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub path: PathBuf,
    pub tags: Vec<String>,
}

impl ImageEntry {
    /// Creates an entry with no tags.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            tags: Vec::new(),
        }
    }

    /// Returns the file name for display, falling back to the full path for
    /// degenerate paths like `..`.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// Supported image extensions.
pub mod extensions {
    /// Image file extensions the scanner accepts.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];
}

/// Checks whether a path has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            extensions::IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
