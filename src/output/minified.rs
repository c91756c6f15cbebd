//! Minified strategy: serve `.min` files, minify bundles.

use super::{Attrs, OutputBuilder, tag};
use crate::asset::{Asset, AssetError, AssetKind, CompiledAsset, MinifiedAsset};
use crate::config::AssetConfig;
use crate::debug;

/// Minified output for one asset kind.
#[derive(Debug, Clone, Copy)]
pub struct Minified {
    kind: AssetKind,
}

impl Minified {
    pub const fn new(kind: AssetKind) -> Self {
        Self { kind }
    }
}

impl OutputBuilder for Minified {
    fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Regenerate the `.min` file if needed; the version is the original's mtime.
    fn build_single(
        &self,
        config: &AssetConfig,
        asset: Asset,
        attrs: &Attrs,
    ) -> Result<String, AssetError> {
        let mut minified = MinifiedAsset::new(config, asset)?;
        if minified.needs_recompile() {
            debug!("minify"; "{} is {:?}, minifying", minified.filename(), minified.state());
            minified.minify()?;
        }
        Ok(tag::render(
            self.kind,
            minified.http_path(),
            minified.mtime(),
            attrs,
        ))
    }

    fn build_compiled(
        &self,
        compiled: &mut CompiledAsset,
        attrs: &Attrs,
    ) -> Result<String, AssetError> {
        if compiled.needs_recompile() {
            debug!("minify"; "{} is {:?}, minifying", compiled.filename(), compiled.state());
            compiled.minify()?;
        } else {
            debug!("fresh"; "{} is up to date", compiled.filename());
        }
        Ok(tag::render(
            self.kind,
            compiled.http_path(),
            compiled.newest_mtime(),
            attrs,
        ))
    }
}
