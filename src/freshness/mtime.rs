//! Mtime-based freshness detection.
//!
//! Versions and staleness are both derived from whole-second modification
//! times, so a source and its bundle compare on the same scale as the
//! `?v=` token rendered into markup.

use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::asset::AssetError;

/// Existence and modification time of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStat {
    pub exists: bool,
    /// Seconds since the Unix epoch, `0` when absent.
    pub mtime: u64,
}

impl FileStat {
    /// Stat for a file that is not there.
    pub const MISSING: Self = Self {
        exists: false,
        mtime: 0,
    };
}

/// Convert a timestamp to whole seconds since the Unix epoch.
///
/// Pre-epoch timestamps clamp to `0`.
pub fn to_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Stat a source file.
///
/// Missing files fail with [`AssetError::ResourceMissing`] unless
/// `ignore_missing` is set, in which case [`FileStat::MISSING`] is returned.
/// Any other failure (permissions, invalid names) is [`AssetError::Io`].
pub fn stat(path: &Path, ignore_missing: bool) -> Result<FileStat, AssetError> {
    match path.metadata() {
        Ok(meta) => Ok(FileStat {
            exists: true,
            mtime: meta.modified().map(to_secs).unwrap_or(0),
        }),
        Err(err) if !is_missing(&err) => Err(AssetError::Io(path.to_path_buf(), err)),
        Err(_) if ignore_missing => Ok(FileStat::MISSING),
        Err(_) => Err(AssetError::ResourceMissing(path.to_path_buf())),
    }
}

/// Absent file, or a path component that is a file rather than a directory.
fn is_missing(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}

/// Stat a generated output. Absence just means "not built yet".
pub fn stat_output(path: &Path) -> FileStat {
    stat(path, true).unwrap_or(FileStat::MISSING)
}
