//! Bundled output files and the rebuild decision.
//!
//! A [`CompiledAsset`] pairs an output file with its ordered constituents.
//! Whether it must be rebuilt is derived purely from mtimes:
//!
//! ```text
//! output missing                      → NotBuilt  → rebuild
//! output older than newest source     → Stale     → rebuild
//! output at least as new as sources   → Fresh     → reuse
//! ```
//!
//! The output file on disk is the only cache; nothing is memoized in process.

use std::fs;
use std::path::{Path, PathBuf};

use super::write::{ensure_parent, write_atomic};
use super::{Asset, AssetError, AssetKind, Minifier};
use crate::config::AssetConfig;
use crate::debug;
use crate::freshness::{FileStat, stat_output};
use crate::utils::path::join_url;

/// Build state of a generated output, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Output does not exist yet.
    NotBuilt,
    /// Output exists but a source is newer.
    Stale,
    /// Output is at least as new as every source.
    Fresh,
}

impl BuildState {
    /// Compare an output against the newest source mtime.
    pub fn of(output: FileStat, newest_source: u64) -> Self {
        if !output.exists {
            Self::NotBuilt
        } else if newest_source > output.mtime {
            Self::Stale
        } else {
            Self::Fresh
        }
    }

    pub fn is_fresh(self) -> bool {
        self == Self::Fresh
    }
}

/// Where a generated file lives: `root/<type folder>/<compiled folder>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OutputLocation {
    pub filename: String,
    pub absolute_path: PathBuf,
    pub http_path: String,
}

impl OutputLocation {
    /// Compute the location and create its directory (idempotent).
    pub fn new(config: &AssetConfig, kind: AssetKind, filename: &str) -> Result<Self, AssetError> {
        let folder = config.type_folder(kind);
        let compiled = config.compiled_folder();
        let absolute_path = config.root().join(folder).join(compiled).join(filename);
        ensure_parent(&absolute_path)?;

        Ok(Self {
            filename: filename.to_owned(),
            http_path: join_url(config.http_root(), &[folder, compiled, filename]),
            absolute_path,
        })
    }
}

/// An output file built from one or more sources of the same kind.
#[derive(Debug, Clone)]
pub struct CompiledAsset {
    kind: AssetKind,
    location: OutputLocation,
    output: FileStat,
    constituents: Vec<Asset>,
}

impl CompiledAsset {
    /// Wrap already-resolved constituents.
    ///
    /// Creates the compiled directory; a missing output file is not an error.
    pub fn new(
        config: &AssetConfig,
        kind: AssetKind,
        filename: &str,
        constituents: Vec<Asset>,
    ) -> Result<Self, AssetError> {
        let location = OutputLocation::new(config, kind, filename)?;
        let output = stat_output(&location.absolute_path);

        Ok(Self {
            kind,
            location,
            output,
            constituents,
        })
    }

    /// Resolve `files` as constituents of `filename`.
    ///
    /// Every source is resolved before anything touches the output.
    pub fn resolve<S: AsRef<str>>(
        config: &AssetConfig,
        kind: AssetKind,
        filename: &str,
        files: &[S],
    ) -> Result<Self, AssetError> {
        let constituents = Asset::resolve_all(config, kind, files)?;
        Self::new(config, kind, filename, constituents)
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn filename(&self) -> &str {
        &self.location.filename
    }

    pub fn absolute_path(&self) -> &Path {
        &self.location.absolute_path
    }

    pub fn http_path(&self) -> &str {
        &self.location.http_path
    }

    /// Constituents in caller order.
    pub fn constituents(&self) -> &[Asset] {
        &self.constituents
    }

    /// Mtime of the output file itself (`0` when not built).
    pub fn output_mtime(&self) -> u64 {
        self.output.mtime
    }

    /// Newest constituent mtime; this is the bundle's version token.
    pub fn newest_mtime(&self) -> u64 {
        self.constituents.iter().map(Asset::mtime).max().unwrap_or(0)
    }

    pub fn state(&self) -> BuildState {
        BuildState::of(self.output, self.newest_mtime())
    }

    /// An empty bundle never needs building.
    pub fn needs_recompile(&self) -> bool {
        !self.constituents.is_empty() && !self.state().is_fresh()
    }

    /// Rebuild by concatenation: each existing source, in order, preceded by
    /// the kind's separator.
    ///
    /// Sources that were tolerated as missing are skipped.
    pub fn concatenate(&mut self) -> Result<(), AssetError> {
        let separator = self.kind.separator();
        let mut bundle = Vec::new();
        for asset in self.existing() {
            let content = fs::read(asset.absolute_path())
                .map_err(|err| AssetError::Io(asset.absolute_path().to_path_buf(), err))?;
            bundle.extend_from_slice(separator.as_bytes());
            bundle.extend_from_slice(&content);
        }

        debug!("compile"; "{} <- {} file(s)", self.http_path(), self.existing().count());
        write_atomic(self.absolute_path(), &bundle)?;
        self.refresh();
        Ok(())
    }

    /// Rebuild by running the minifier over every existing source.
    pub fn minify(&mut self) -> Result<(), AssetError> {
        let mut minifier = Minifier::new(self.kind);
        for asset in self.existing() {
            minifier.add(asset.absolute_path());
        }
        minifier.minify(self.absolute_path())?;
        self.refresh();
        Ok(())
    }

    fn existing(&self) -> impl Iterator<Item = &Asset> {
        self.constituents.iter().filter(|asset| asset.exists())
    }

    /// Re-read the output stat after a write.
    fn refresh(&mut self) {
        self.output = stat_output(self.absolute_path());
    }
}
