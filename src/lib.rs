//! Script and stylesheet tags for server-rendered pages.
//!
//! Resolves logical asset names to files under a site root, optionally
//! bundles and minifies them into a compiled folder, and renders tags whose
//! URLs carry a `?v=<mtime>` cache-busting token. Outputs are rebuilt only
//! when a source is newer than the generated file.
//!
//! ```ignore
//! let config = AssetConfig::new("public")?.with_minify(true);
//! let compiler = AssetCompiler::new(config);
//! let tag = compiler.get_styles_multi(&["reset.css", "site.css"], "all.css", &[])?;
//! ```

pub mod asset;
pub mod compiler;
pub mod config;
pub mod freshness;
pub mod logger;
pub mod output;
pub mod utils;

pub use asset::{AssetError, AssetKind};
pub use compiler::AssetCompiler;
pub use config::{AssetConfig, ConfigError};
