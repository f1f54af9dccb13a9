// SPDX-License-Identifier: MPL-2.0
//! The image list model: one entry per discovered image in the loaded
//! directory, each carrying its tag list.

use crate::app::config::SortOrder;
use crate::error::Result;
use crate::library::{scanner, sidecar, ImageEntry};
use std::path::{Path, PathBuf};

/// Ordered sequence of image entries for one directory.
///
/// All mutations go through [`load_directory`](Self::load_directory) and
/// [`update_tags`](Self::update_tags); callers recompute derived state (the
/// tag count table) after either.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageListModel {
    entries: Vec<ImageEntry>,
    directory: Option<PathBuf>,
}

impl ImageListModel {
    /// Creates an empty model with no directory loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the entry list from a directory scan.
    ///
    /// Tags are read from each image's sidecar; an unreadable sidecar counts
    /// as an empty tag list so a single bad file cannot block the load.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory itself cannot be read. The previous
    /// entries are left untouched in that case.
    pub fn load_directory(
        &mut self,
        directory: &Path,
        sort_order: SortOrder,
        separator: &str,
    ) -> Result<()> {
        let files = scanner::scan_directory(directory, sort_order)?;

        self.entries = files
            .into_iter()
            .map(|path| {
                let tags = sidecar::read_tags(&path, separator).unwrap_or_default();
                ImageEntry { path, tags }
            })
            .collect();
        self.directory = Some(directory.to_path_buf());
        Ok(())
    }

    /// Replaces the tags of the entry at `index` and rewrites its sidecar.
    ///
    /// Out-of-range indexes are ignored; the selection can legitimately point
    /// past the end after an external reload shrank the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidecar cannot be written. The in-memory
    /// entry keeps the new tags either way so the UI stays consistent.
    pub fn update_tags(&mut self, index: usize, tags: Vec<String>, separator: &str) -> Result<()> {
        let Some(entry) = self.entries.get_mut(index) else {
            return Ok(());
        };
        entry.tags = tags;
        sidecar::write_tags(&entry.path, &entry.tags, separator)
    }

    /// Drops all entries and forgets the loaded directory. Used when a
    /// restored directory turns out to no longer exist.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.directory = None;
    }

    /// Returns all entries in list order.
    #[must_use]
    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    /// Returns the entry at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageEntry> {
        self.entries.get(index)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the currently loaded directory, if any.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn seed_directory() -> tempfile::TempDir {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join("a.png"), b"fake").expect("write a.png");
        fs::write(dir.path().join("b.jpg"), b"fake").expect("write b.jpg");
        fs::write(dir.path().join("b.txt"), "cat, gray").expect("write b.txt");
        dir
    }

    #[test]
    fn load_directory_reads_sidecars() {
        let dir = seed_directory();
        let mut model = ImageListModel::new();
        model
            .load_directory(dir.path(), SortOrder::Alphabetical, ", ")
            .expect("load should succeed");

        assert_eq!(model.len(), 2);
        assert_eq!(model.get(0).unwrap().file_name(), "a.png");
        assert!(model.get(0).unwrap().tags.is_empty());
        assert_eq!(
            model.get(1).unwrap().tags,
            vec!["cat".to_string(), "gray".to_string()]
        );
        assert_eq!(model.directory(), Some(dir.path()));
    }

    #[test]
    fn load_of_missing_directory_fails_and_keeps_entries() {
        let dir = seed_directory();
        let mut model = ImageListModel::new();
        model
            .load_directory(dir.path(), SortOrder::Alphabetical, ", ")
            .expect("load should succeed");

        let missing = dir.path().join("gone");
        assert!(model
            .load_directory(&missing, SortOrder::Alphabetical, ", ")
            .is_err());
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn update_tags_rewrites_sidecar() {
        let dir = seed_directory();
        let mut model = ImageListModel::new();
        model
            .load_directory(dir.path(), SortOrder::Alphabetical, ", ")
            .expect("load should succeed");

        model
            .update_tags(0, vec!["beach".to_string(), "sunset".to_string()], ", ")
            .expect("update should succeed");

        assert_eq!(model.get(0).unwrap().tags.len(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("a.txt")).expect("sidecar exists"),
            "beach, sunset"
        );
    }

    #[test]
    fn update_tags_out_of_range_is_a_no_op() {
        let dir = seed_directory();
        let mut model = ImageListModel::new();
        model
            .load_directory(dir.path(), SortOrder::Alphabetical, ", ")
            .expect("load should succeed");

        model
            .update_tags(99, vec!["beach".to_string()], ", ")
            .expect("no-op should succeed");
        assert!(!dir.path().join("a.txt").exists());
    }

    #[test]
    fn reload_picks_up_edited_tags() {
        let dir = seed_directory();
        let mut model = ImageListModel::new();
        model
            .load_directory(dir.path(), SortOrder::Alphabetical, ", ")
            .expect("load should succeed");
        model
            .update_tags(0, vec!["new".to_string()], ", ")
            .expect("update should succeed");

        let mut reloaded = ImageListModel::new();
        reloaded
            .load_directory(dir.path(), SortOrder::Alphabetical, ", ")
            .expect("reload should succeed");
        assert_eq!(reloaded.get(0).unwrap().tags, vec!["new".to_string()]);
    }
}
