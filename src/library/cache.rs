// SPDX-License-Identifier: MPL-2.0
//! Bounded LRU cache for decoded images.
//!
//! Reselecting a recently viewed image should not hit the decoder again, so
//! the application keeps the last few decoded images keyed by path.

use crate::library::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Default number of decoded images kept in memory.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// LRU cache of decoded images keyed by path.
#[derive(Debug)]
pub struct ImageCache {
    cache: LruCache<PathBuf, ImageData>,
}

impl ImageCache {
    /// Creates a cache with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a cache with a custom capacity. A zero capacity is bumped to 1
    /// so the cache type's non-zero invariant holds.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1");
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Returns the cached image for a path, marking it most recently used.
    pub fn get(&mut self, path: &Path) -> Option<ImageData> {
        self.cache.get(path).cloned()
    }

    /// Stores a decoded image, evicting the least recently used entry when
    /// over capacity.
    pub fn put(&mut self, path: PathBuf, data: ImageData) {
        self.cache.put(path, data);
    }

    /// Drops all cached images. Called when a new directory is loaded so
    /// stale decodes from the previous directory do not linger.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Returns the number of cached images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Checks whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}
