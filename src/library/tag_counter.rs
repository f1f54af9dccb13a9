// SPDX-License-Identifier: MPL-2.0
//! Tag occurrence counts across all images in the loaded directory.
//!
//! The table is fully recomputed on every image-list change rather than
//! incrementally maintained; directories are small enough that a full pass
//! is cheaper than keeping deltas correct.

use crate::library::ImageEntry;
use std::collections::HashMap;

/// Mapping of tag string → occurrence count, kept in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagCounts {
    /// Sorted for display: descending count, ties alphabetical.
    ordered: Vec<(String, usize)>,
    by_tag: HashMap<String, usize>,
}

impl TagCounts {
    /// Creates an empty count table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the table from scratch over all entries.
    pub fn recount(&mut self, entries: &[ImageEntry]) {
        self.by_tag.clear();
        for entry in entries {
            for tag in &entry.tags {
                *self.by_tag.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        self.ordered = self
            .by_tag
            .iter()
            .map(|(tag, count)| (tag.clone(), *count))
            .collect();
        self.ordered
            .sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    }

    /// Returns the count for a tag (0 if unseen).
    #[must_use]
    pub fn count_for(&self, tag: &str) -> usize {
        self.by_tag.get(tag).copied().unwrap_or(0)
    }

    /// Returns tags in display order: descending count, ties alphabetical.
    #[must_use]
    pub fn ordered(&self) -> &[(String, usize)] {
        &self.ordered
    }

    /// Returns the number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Checks whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(name: &str, tags: &[&str]) -> ImageEntry {
        ImageEntry {
            path: PathBuf::from(name),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn recount_builds_multiset_union() {
        let entries = vec![
            entry("a.png", &["cat", "gray"]),
            entry("b.png", &["cat"]),
            entry("c.png", &[]),
        ];
        let mut counts = TagCounts::new();
        counts.recount(&entries);

        assert_eq!(counts.count_for("cat"), 2);
        assert_eq!(counts.count_for("gray"), 1);
        assert_eq!(counts.count_for("dog"), 0);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn ordering_is_count_descending_then_alphabetical() {
        let entries = vec![
            entry("a.png", &["zebra", "apple"]),
            entry("b.png", &["zebra", "mango"]),
        ];
        let mut counts = TagCounts::new();
        counts.recount(&entries);

        let ordered: Vec<_> = counts
            .ordered()
            .iter()
            .map(|(tag, count)| (tag.as_str(), *count))
            .collect();
        assert_eq!(ordered, vec![("zebra", 2), ("apple", 1), ("mango", 1)]);
    }

    #[test]
    fn recount_replaces_previous_table() {
        let mut counts = TagCounts::new();
        counts.recount(&[entry("a.png", &["old"])]);
        assert_eq!(counts.count_for("old"), 1);

        counts.recount(&[entry("a.png", &["new"])]);
        assert_eq!(counts.count_for("old"), 0);
        assert_eq!(counts.count_for("new"), 1);
    }

    #[test]
    fn empty_entries_yield_empty_table() {
        let mut counts = TagCounts::new();
        counts.recount(&[]);
        assert!(counts.is_empty());
    }
}
