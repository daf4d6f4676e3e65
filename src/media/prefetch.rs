// SPDX-License-Identifier: MPL-2.0
//! Decoded-image cache for the lightbox's neighbour preloading.
//!
//! The lightbox asks for the images next to the current slide after every
//! navigation. Decoded results land here so that the following `next` or
//! `prev` can show the picture without touching the disk.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Memory-bounded**: Total cache size limited by configurable byte limit
//! - **Path-keyed**: Images indexed by their file path
//!
//! Staleness is not this cache's concern: a decode that finishes after the
//! gallery was reset is dropped before it reaches [`ImagePrefetchCache::insert`].

use crate::config::{
    DEFAULT_PREFETCH_CACHE_BYTES, DEFAULT_PREFETCH_MAX_IMAGES, MAX_PREFETCH_CACHE_BYTES,
    MAX_PREFETCH_MAX_IMAGES, MIN_PREFETCH_CACHE_BYTES, MIN_PREFETCH_MAX_IMAGES,
};
use crate::error::{Error, Result};
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_PREFETCH_MAX_IMAGES) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

/// Configuration for the prefetch cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,

    /// Maximum number of images to cache.
    pub max_images: usize,

    /// Whether prefetching is enabled.
    pub enabled: bool,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_PREFETCH_CACHE_BYTES,
            max_images: DEFAULT_PREFETCH_MAX_IMAGES,
            enabled: true,
        }
    }
}

impl PrefetchConfig {
    /// Creates an enabled configuration, clamping both limits to their ranges.
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_PREFETCH_CACHE_BYTES, MAX_PREFETCH_CACHE_BYTES),
            max_images: max_images.clamp(MIN_PREFETCH_MAX_IMAGES, MAX_PREFETCH_MAX_IMAGES),
            enabled: true,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    image: ImageData,
    size_bytes: usize,
}

impl CacheEntry {
    fn new(image: ImageData) -> Self {
        let size_bytes = image.size_bytes();
        Self { image, size_bytes }
    }
}

/// Statistics about prefetch cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefetchStats {
    /// Number of images currently in cache.
    pub image_count: usize,

    /// Total bytes currently used by cached images.
    pub total_bytes: usize,

    pub hits: u64,
    pub misses: u64,

    /// Number of images evicted due to limits.
    pub evictions: u64,

    pub insertions: u64,
}

impl PrefetchStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache of decoded portfolio images.
pub struct ImagePrefetchCache {
    cache: LruCache<PathBuf, CacheEntry>,
    config: PrefetchConfig,
    current_bytes: usize,
    stats: PrefetchStats,
}

impl ImagePrefetchCache {
    #[must_use]
    pub fn new(config: PrefetchConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(FALLBACK_CAPACITY);

        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: PrefetchStats::default(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Inserts an image into the cache.
    ///
    /// Returns `true` if the image was inserted, `false` if caching is disabled
    /// or the image is larger than half the byte budget.
    pub fn insert(&mut self, path: PathBuf, image: ImageData) -> bool {
        if !self.config.enabled {
            return false;
        }

        let entry = CacheEntry::new(image);
        let image_size = entry.size_bytes;

        if image_size > self.config.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&path) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + image_size > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        // `push` hands back the entry it displaced when the count limit is hit.
        if let Some((_, evicted)) = self.cache.push(path, entry) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            self.stats.evictions += 1;
        }
        self.current_bytes += image_size;
        self.stats.insertions += 1;
        self.sync_stats();

        true
    }

    /// Gets an image from the cache by path, updating LRU order.
    pub fn get(&mut self, path: &Path) -> Option<ImageData> {
        if !self.config.enabled {
            return None;
        }

        if let Some(entry) = self.cache.get(path) {
            self.stats.hits += 1;
            Some(entry.image.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Checks if an image is cached for the given path without updating LRU order.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.config.enabled && self.cache.contains(path)
    }

    #[must_use]
    pub fn stats(&self) -> PrefetchStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn sync_stats(&mut self) {
        self.stats.image_count = self.cache.len();
        self.stats.total_bytes = self.current_bytes;
    }
}

impl std::fmt::Debug for ImagePrefetchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePrefetchCache")
            .field("enabled", &self.config.enabled)
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_images", &self.config.max_images)
            .field("stats", &self.stats)
            .finish()
    }
}

/// Decodes `path` on the blocking pool.
///
/// Returns the path alongside the result so the caller can key the cache.
pub async fn load_image_for_prefetch(path: PathBuf) -> (PathBuf, Result<ImageData>) {
    let path_clone = path.clone();
    let result = tokio::task::spawn_blocking(move || crate::media::load_image(&path_clone))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Prefetch task failed: {e}"))));

    (path, result)
}
