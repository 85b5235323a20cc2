// SPDX-License-Identifier: MPL-2.0
//! Bounded thumbnail loading for the picker grid.
//!
//! Each grid cell needs a small preview exactly once. Decoding happens on a
//! blocking thread and the result re-enters the UI loop as a message; the
//! picker consults a byte-bounded LRU cache first so re-presenting the popup
//! reuses previews instead of decoding the library again.

use crate::error::{Error, Result};
use crate::library::asset::PhotoAsset;
use iced::widget::image;
use image_rs::GenericImageView;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Default thumbnail cache capacity in entries.
pub const DEFAULT_CACHE_ENTRIES: usize = 256;

/// Default thumbnail cache budget in bytes (8 MB).
/// A 100x100 RGBA thumbnail is ~40 kB, so this holds ~200 previews.
pub const DEFAULT_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// A decoded, downscaled preview ready for the grid.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl Thumbnail {
    /// Decoded size in bytes (RGBA).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes `path` and scales it to fit inside `target_px` square pixels,
/// preserving aspect ratio.
pub fn render_thumbnail(path: &Path, target_px: u32) -> Result<Thumbnail> {
    let decoded = image_rs::open(path).map_err(|e| Error::Image(e.to_string()))?;
    let scaled = decoded.thumbnail(target_px, target_px);
    let (width, height) = scaled.dimensions();
    let pixels = scaled.to_rgba8().into_vec();

    Ok(Thumbnail {
        handle: image::Handle::from_rgba(width, height, pixels),
        width,
        height,
    })
}

/// Loads a thumbnail for `asset` on a blocking thread.
///
/// Returns the asset path alongside the result so the caller can key its
/// cache without re-deriving it.
pub async fn load_thumbnail(asset: PhotoAsset, target_px: u32) -> (PathBuf, Result<Thumbnail>) {
    let path = asset.path().to_path_buf();
    let path_for_task = path.clone();
    let result = tokio::task::spawn_blocking(move || render_thumbnail(&path_for_task, target_px))
        .await
        .unwrap_or_else(|e| Err(Error::Image(format!("Thumbnail task failed: {e}"))));

    (path, result)
}

/// Path-keyed LRU cache of thumbnails, bounded by entry count and total bytes.
pub struct ThumbnailCache {
    cache: LruCache<PathBuf, Thumbnail>,
    max_bytes: usize,
    current_bytes: usize,
}

impl ThumbnailCache {
    /// Creates a cache bounded by `max_entries` and `max_bytes`.
    #[must_use]
    pub fn new(max_entries: usize, max_bytes: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries)
            .unwrap_or(NonZeroUsize::new(DEFAULT_CACHE_ENTRIES).expect("non-zero default"));

        Self {
            cache: LruCache::new(capacity),
            max_bytes,
            current_bytes: 0,
        }
    }

    /// Creates a cache with the default bounds.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CACHE_ENTRIES, DEFAULT_CACHE_BYTES)
    }

    /// Inserts a thumbnail, evicting least-recently-used entries until it
    /// fits. Thumbnails larger than half the byte budget are not cached.
    pub fn insert(&mut self, path: PathBuf, thumbnail: Thumbnail) -> bool {
        let size = thumbnail.size_bytes();
        if size > self.max_bytes / 2 {
            return false;
        }

        if let Some(previous) = self.cache.pop(&path) {
            self.current_bytes = self.current_bytes.saturating_sub(previous.size_bytes());
        }

        while self.current_bytes + size > self.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            }
        }

        self.current_bytes += size;
        // `push` reports the pair evicted by the entry-count bound (the same
        // key cannot come back because it was popped above).
        if let Some((_, evicted)) = self.cache.push(path, thumbnail) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
        }
        true
    }

    /// Looks up a thumbnail, refreshing its LRU position.
    pub fn get(&mut self, path: &Path) -> Option<Thumbnail> {
        self.cache.get(path).cloned()
    }

    /// Checks for a cached thumbnail without touching LRU order.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Current decoded bytes held by the cache.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("entries", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .finish()
    }
}
