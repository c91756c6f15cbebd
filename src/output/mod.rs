//! Output builders: decide whether to (re)generate, then render markup.
//!
//! Four strategies over `{Js, Css} × {Plain, Minified}`, resolved once per
//! call through [`builder`]. All of them share tag rendering ([`tag`]) and
//! the debug behavior (one un-bundled tag per source).

mod minified;
mod plain;
pub mod tag;

pub use minified::Minified;
pub use plain::Plain;
pub use tag::Attrs;

use crate::asset::{Asset, AssetError, AssetKind, CompiledAsset};
use crate::config::AssetConfig;

/// How sources are turned into outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reference sources directly; bundles are concatenated.
    Plain,
    /// Serve `.min` files; bundles are minified.
    Minified,
}

impl Mode {
    /// Minified only when enabled and not in debug mode.
    pub fn for_config(config: &AssetConfig) -> Self {
        if config.minify_active() {
            Self::Minified
        } else {
            Self::Plain
        }
    }
}

/// Renders markup for single files and bundles of one asset kind.
pub trait OutputBuilder {
    fn kind(&self) -> AssetKind;

    /// Render one source, generating any derived file it needs first.
    fn build_single(
        &self,
        config: &AssetConfig,
        asset: Asset,
        attrs: &Attrs,
    ) -> Result<String, AssetError>;

    /// Rebuild the bundle if it needs it, then render it.
    fn build_compiled(
        &self,
        compiled: &mut CompiledAsset,
        attrs: &Attrs,
    ) -> Result<String, AssetError>;

    /// Render one source as-is, never writing anything.
    fn build_single_debug(&self, asset: &Asset, attrs: &Attrs) -> String {
        tag::render(self.kind(), asset.http_path(), asset.mtime(), attrs)
    }

    /// One debug tag per source, each on its own line, in caller order.
    fn build_compiled_debug(&self, assets: &[Asset], attrs: &Attrs) -> String {
        assets
            .iter()
            .map(|asset| self.build_single_debug(asset, attrs) + "\n")
            .collect()
    }
}

static PLAIN_JS: Plain = Plain::new(AssetKind::Js);
static PLAIN_CSS: Plain = Plain::new(AssetKind::Css);
static MINIFIED_JS: Minified = Minified::new(AssetKind::Js);
static MINIFIED_CSS: Minified = Minified::new(AssetKind::Css);

/// Pick the strategy for a kind and mode.
pub fn builder(kind: AssetKind, mode: Mode) -> &'static dyn OutputBuilder {
    match (kind, mode) {
        (AssetKind::Js, Mode::Plain) => &PLAIN_JS,
        (AssetKind::Css, Mode::Plain) => &PLAIN_CSS,
        (AssetKind::Js, Mode::Minified) => &MINIFIED_JS,
        (AssetKind::Css, Mode::Minified) => &MINIFIED_CSS,
    }
}
