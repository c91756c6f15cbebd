//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `trim_separators` / `trim_trailing_separators` - config value cleanup

use std::path::{Path, PathBuf};

/// Both separator styles are accepted in config values.
const SEPARATORS: [char; 2] = ['/', '\\'];

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Strip leading and trailing `/` and `\` from a subpath.
///
/// # Example
/// ```ignore
/// assert_eq!(trim_separators("/alternate\\"), "alternate");
/// ```
#[inline]
pub fn trim_separators(value: &str) -> String {
    value.trim_matches(SEPARATORS).to_owned()
}

/// Strip trailing `/` and `\` only (roots keep their leading slash).
#[inline]
pub fn trim_trailing_separators(value: &str) -> String {
    value.trim_end_matches(SEPARATORS).to_owned()
}
