//! Plain strategy: reference sources directly, concatenate bundles.

use super::{Attrs, OutputBuilder, tag};
use crate::asset::{Asset, AssetError, AssetKind, CompiledAsset};
use crate::config::AssetConfig;
use crate::debug;

/// Unminified output for one asset kind.
#[derive(Debug, Clone, Copy)]
pub struct Plain {
    kind: AssetKind,
}

impl Plain {
    pub const fn new(kind: AssetKind) -> Self {
        Self { kind }
    }
}

impl OutputBuilder for Plain {
    fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Single plain files are only referenced, never written.
    fn build_single(
        &self,
        _config: &AssetConfig,
        asset: Asset,
        attrs: &Attrs,
    ) -> Result<String, AssetError> {
        Ok(self.build_single_debug(&asset, attrs))
    }

    fn build_compiled(
        &self,
        compiled: &mut CompiledAsset,
        attrs: &Attrs,
    ) -> Result<String, AssetError> {
        if compiled.needs_recompile() {
            debug!("compile"; "{} is {:?}, concatenating", compiled.filename(), compiled.state());
            compiled.concatenate()?;
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
