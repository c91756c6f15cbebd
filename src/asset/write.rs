//! Atomic output writes.
//!
//! Outputs are written to a temporary file in the destination directory
//! and renamed over the target, so a failed regeneration leaves the
//! previous output untouched and readers never observe a half-written file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use super::AssetError;

/// Create the parent directory of `path` (idempotent).
pub fn ensure_parent(path: &Path) -> Result<(), AssetError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|err| AssetError::Io(parent.to_path_buf(), err))
        }
        _ => Ok(()),
    }
}

/// Replace `path` with `contents` via temp file + rename.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), AssetError> {
    let io_err = |err: io::Error| AssetError::Io(path.to_path_buf(), err);

    ensure_parent(path)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = temp_file_in(dir).map_err(io_err)?;
    file.write_all(contents).map_err(io_err)?;
    file.persist(path).map_err(|err| io_err(err.error))?;
    Ok(())
}

/// Temp file whose mode matches a plainly created file (`0666 & !umask`).
///
/// tempfile defaults to `0600` and `persist` keeps the temp file's mode.
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
