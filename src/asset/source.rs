//! A single resolved source file.

use std::path::{Path, PathBuf};

use super::{AssetError, AssetKind};
use crate::config::AssetConfig;
use crate::freshness::{self, FileStat};
use crate::utils::path::join_url;

/// One script or stylesheet under `root/<type folder>/`.
///
/// Resolved once at construction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    kind: AssetKind,
    filename: String,
    absolute_path: PathBuf,
    http_path: String,
    stat: FileStat,
}

impl Asset {
    /// Resolve `filename` (relative to the kind's folder) and stat it.
    ///
    /// Fails with [`AssetError::ResourceMissing`] when the file is absent and
    /// the config does not ignore missing files.
    pub fn new(config: &AssetConfig, kind: AssetKind, filename: &str) -> Result<Self, AssetError> {
        let folder = config.type_folder(kind);
        let absolute_path = config.root().join(folder).join(filename);
        let http_path = join_url(config.http_root(), &[folder, filename]);
        let stat = freshness::stat(&absolute_path, config.ignore_missing())?;

        Ok(Self {
            kind,
            filename: filename.to_owned(),
            absolute_path,
            http_path,
            stat,
        })
    }

    /// Resolve several files in order, stopping at the first failure.
    pub fn resolve_all<S: AsRef<str>>(
        config: &AssetConfig,
        kind: AssetKind,
        filenames: &[S],
    ) -> Result<Vec<Self>, AssetError> {
        filenames
            .iter()
            .map(|name| Self::new(config, kind, name.as_ref()))
            .collect()
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Name as given by the caller.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn http_path(&self) -> &str {
        &self.http_path
    }

    /// Modification time in seconds, `0` for a tolerated missing file.
    pub fn mtime(&self) -> u64 {
        self.stat.mtime
    }

    pub fn exists(&self) -> bool {
        self.stat.exists
    }
}
