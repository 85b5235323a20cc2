// SPDX-License-Identifier: MPL-2.0
//! Grid entry model.
//!
//! Every cell in the picker grid wraps one library asset together with a
//! locally generated identity. The two identities are deliberately distinct:
//! the asset path says "same photo", the [`EntryId`] says "same grid cell
//! instance", and toggling is always keyed by the latter.

use crate::library::asset::PhotoAsset;
use crate::library::thumbnail::Thumbnail;

/// Locally generated, process-unique identifier for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

impl EntryId {
    /// Returns a fresh identifier.
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// One fetched photo in the grid.
///
/// The thumbnail is populated lazily, at most once, when the cell first
/// becomes visible. `rank` is `None` while the entry sits in the fetched
/// list; only the copies held by [`super::selection::Selection`] carry a
/// position.
#[derive(Debug, Clone)]
pub struct GridEntry {
    pub id: EntryId,
    pub asset: PhotoAsset,
    pub thumbnail: Option<Thumbnail>,
    pub rank: Option<usize>,
}

impl GridEntry {
    /// Wraps a scanned asset into an unselected, thumbnail-less entry.
    #[must_use]
    pub fn new(asset: PhotoAsset) -> Self {
        Self {
            id: EntryId::next(),
            asset,
            thumbnail: None,
            rank: None,
        }
    }
}
