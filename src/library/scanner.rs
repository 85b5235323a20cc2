// SPDX-License-Identifier: MPL-2.0
//! Library scanner producing the picker's photo listing.
//!
//! One scan per picker presentation: image files only, hidden entries
//! excluded, top level of the library directory only, ordered most recent
//! first by capture date. There is no pagination and no retry; a failed scan
//! degrades to an empty listing at the call site.

use crate::error::{Error, Result};
use crate::library::asset::PhotoAsset;
use std::path::{Path, PathBuf};

/// Raster formats accepted as library photos.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

/// Scans `dir` for photos and sorts them most recent first.
///
/// Returns an error only when the directory itself cannot be read; unreadable
/// individual entries are skipped.
pub fn scan_library(dir: &Path) -> Result<Vec<PhotoAsset>> {
    let mut assets = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let Ok(entry) = entry else { continue };
        let path = entry.path();

        if path.is_file() && !is_hidden(&path) && is_supported_image(&path) {
            assets.push(PhotoAsset::from_path(path));
        }
    }

    sort_most_recent_first(&mut assets);
    Ok(assets)
}

/// Async wrapper that runs the scan on a blocking thread.
///
/// The filesystem walk and per-file EXIF reads are blocking work; the result
/// re-enters the UI loop as a message.
pub async fn scan_library_task(dir: PathBuf) -> Result<Vec<PhotoAsset>> {
    tokio::task::spawn_blocking(move || scan_library(&dir))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Library scan task failed: {e}"))))
}

/// Checks if a file has a supported raster image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Hidden entries (dotfiles) are excluded from the listing.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Orders assets by capture date descending, file name descending as the
/// tie-breaker so the listing is total and deterministic.
fn sort_most_recent_first(assets: &mut [PhotoAsset]) {
    assets.sort_by(|a, b| {
        b.captured_at()
            .cmp(&a.captured_at())
            .then_with(|| b.file_name().cmp(&a.file_name()))
    });
}
