// SPDX-License-Identifier: MPL-2.0
//! Asset references into the photo library.
//!
//! A [`PhotoAsset`] points at one library entry; the underlying file is owned
//! by the filesystem, never by this crate. The path doubles as the library
//! identity of the asset.

use std::ffi::OsString;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Reference to one photo-library entry plus the capture timestamp used for
/// most-recent-first ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoAsset {
    path: PathBuf,
    captured_at: SystemTime,
}

impl PhotoAsset {
    /// Creates an asset with an explicit capture timestamp.
    #[must_use]
    pub fn new(path: PathBuf, captured_at: SystemTime) -> Self {
        Self { path, captured_at }
    }

    /// Creates an asset for `path`, resolving its capture date from EXIF
    /// metadata when present and filesystem timestamps otherwise.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let captured_at = capture_date(&path);
        Self { path, captured_at }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn captured_at(&self) -> SystemTime {
        self.captured_at
    }

    /// File name component, used as the deterministic ordering tie-breaker.
    pub fn file_name(&self) -> OsString {
        self.path.file_name().map(OsString::from).unwrap_or_default()
    }
}

/// Resolves the capture date of an image file.
///
/// Resolution order: EXIF `DateTimeOriginal`, filesystem modification time,
/// filesystem creation time, UNIX epoch. Camera files usually carry EXIF;
/// screenshots and downloads fall back to the filesystem. Modification time
/// is preferred over creation time because copying a library preserves it.
#[must_use]
pub fn capture_date(path: &Path) -> SystemTime {
    if let Some(time) = exif_capture_date(path) {
        return time;
    }

    path.metadata()
        .ok()
        .and_then(|m| m.modified().or_else(|_| m.created()).ok())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

fn exif_capture_date(path: &Path) -> Option<SystemTime> {
    let file = fs::File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;

    let field = exif.get_field(exif::Tag::DateTimeOriginal, exif::In::PRIMARY)?;
    let ascii = match &field.value {
        exif::Value::Ascii(values) => values.first()?.as_slice(),
        _ => return None,
    };
    let datetime = exif::DateTime::from_ascii(ascii).ok()?;

    // EXIF timestamps are local wall-clock time without an offset; treating
    // them as UTC keeps ordering stable, which is all the picker needs.
    let date = chrono::NaiveDate::from_ymd_opt(
        i32::from(datetime.year),
        u32::from(datetime.month),
        u32::from(datetime.day),
    )?;
    let naive = date.and_hms_opt(
        u32::from(datetime.hour),
        u32::from(datetime.minute),
        u32::from(datetime.second),
    )?;

    let timestamp = naive.and_utc().timestamp();
    u64::try_from(timestamp)
        .ok()
        .map(|secs| SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn asset_exposes_path_and_file_name() {
        let asset = PhotoAsset::new(PathBuf::from("/photos/a.jpg"), SystemTime::UNIX_EPOCH);
        assert_eq!(asset.path(), Path::new("/photos/a.jpg"));
        assert_eq!(asset.file_name(), OsString::from("a.jpg"));
    }

    #[test]
    fn capture_date_falls_back_to_filesystem_time() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("no_exif.jpg");
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"not really a jpeg")
            .expect("failed to write test file");
        drop(file);

        let captured = capture_date(&path);
        assert!(captured > SystemTime::UNIX_EPOCH);
    }

    #[test]
    fn capture_date_of_missing_file_is_epoch() {
        let captured = capture_date(Path::new("/definitely/not/here.jpg"));
        assert_eq!(captured, SystemTime::UNIX_EPOCH);
    }
}
