//! Minified single-file outputs (`app.js` → `compiled/app.min.js`).

use std::path::Path;

use super::compiled::{BuildState, OutputLocation};
use super::{Asset, AssetError, Minifier};
use crate::config::AssetConfig;
use crate::freshness::{FileStat, stat_output};

/// The `.min` counterpart of one source file.
///
/// Staleness and the reported version are anchored to the original source,
/// never to the minified file's own mtime.
#[derive(Debug, Clone)]
pub struct MinifiedAsset {
    original: Asset,
    location: OutputLocation,
    output: FileStat,
}

impl MinifiedAsset {
    pub fn new(config: &AssetConfig, original: Asset) -> Result<Self, AssetError> {
        let filename = minified_name(original.filename());
        let location = OutputLocation::new(config, original.kind(), &filename)?;
        let output = stat_output(&location.absolute_path);

        Ok(Self {
            original,
            location,
            output,
        })
    }

    pub fn original(&self) -> &Asset {
        &self.original
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

    /// The original's mtime; used as the version token.
    pub fn mtime(&self) -> u64 {
        self.original.mtime()
    }

    pub fn state(&self) -> BuildState {
        BuildState::of(self.output, self.original.mtime())
    }

    /// A missing original (tolerated) is never minified.
    pub fn needs_recompile(&self) -> bool {
        self.original.exists() && !self.state().is_fresh()
    }

    /// Minify the original into the `.min` path.
    pub fn minify(&mut self) -> Result<(), AssetError> {
        let mut minifier = Minifier::new(self.original.kind());
        minifier.add(self.original.absolute_path());
        minifier.minify(&self.location.absolute_path)?;
        self.output = stat_output(&self.location.absolute_path);
        Ok(())
    }
}

/// Insert `.min` before the final extension of the file name.
///
/// Dots in directory segments are ignored; a name without an extension
/// gets `.min` appended.
///
/// # Examples
/// ```ignore
/// minified_name("test1.css")         -> "test1.min.css"
/// minified_name("vendor/lib.v2.js")  -> "vendor/lib.v2.min.js"
/// minified_name("v1.2/LICENSE")      -> "v1.2/LICENSE.min"
/// ```
pub fn minified_name(filename: &str) -> String {
    let base_start = filename.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match filename[base_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let (stem, ext) = filename.split_at(base_start + dot);
            format!("{stem}.min{ext}")
        }
        _ => format!("{filename}.min"),
    }
}
