//! Asset compiler configuration.
//!
//! [`AssetConfig`] is an immutable value: it is built once, validated once
//! (the root must be an existing directory) and then passed by reference to
//! every operation.
//!
//! # Example
//!
//! ```toml
//! # assets.toml
//! root = "public"              # required, relative to this file, `~` expanded
//! http_root = "/static"        # default ""
//! js_path = "js"               # default "js"
//! css_path = "css"             # default "css"
//! compiled_folder = "compiled" # default "compiled", "" disables the nested folder
//! debug = false
//! minify = false
//! ignore_missing = false
//! ```

mod error;
mod util;

pub use error::ConfigError;
pub use util::find_config_file;

use crate::asset::AssetKind;
use crate::log;
use crate::utils::path::{normalize_path, trim_separators, trim_trailing_separators};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up when none is given explicitly.
pub const DEFAULT_CONFIG_NAME: &str = "assets.toml";
/// Default subfolder for JavaScript sources.
pub const DEFAULT_JS_PATH: &str = "js";
/// Default subfolder for stylesheet sources.
pub const DEFAULT_CSS_PATH: &str = "css";
/// Default folder (nested in the type folder) for generated files.
pub const DEFAULT_COMPILED_FOLDER: &str = "compiled";

// ============================================================================
// root configuration
// ============================================================================

/// Paths and modes shared by every asset lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding the `js`/`css` folders.
    root: PathBuf,
    /// Prefix for generated URLs (`""`, `/static`, `https://cdn.example.com`).
    http_root: String,
    /// Folder under `root` holding scripts.
    js_path: String,
    /// Folder under `root` holding stylesheets.
    css_path: String,
    /// Folder under each type folder receiving bundles and `.min` files.
    compiled_folder: String,
    /// Serve every source individually, never bundle or minify.
    debug: bool,
    /// Minify single files and bundles.
    minify: bool,
    /// Treat missing sources as empty (`?v=0`) instead of failing.
    ignore_missing: bool,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            http_root: String::new(),
            js_path: DEFAULT_JS_PATH.into(),
            css_path: DEFAULT_CSS_PATH.into(),
            compiled_folder: DEFAULT_COMPILED_FOLDER.into(),
            debug: false,
            minify: false,
            ignore_missing: false,
        }
    }
}

impl AssetConfig {
    /// Create a configuration rooted at `root` with default settings.
    ///
    /// Fails with [`ConfigError::DirectoryDoesNotExist`] when `root` is not a directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::default().with_root(root)
    }

    /// Load configuration from a TOML file.
    ///
    /// A relative `root` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_str(&content, base)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Unknown fields are reported as a warning and otherwise ignored.
    pub fn from_str(content: &str, base: &Path) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        if !ignored.is_empty() {
            log!("warning"; "ignoring unknown config fields: {}", ignored.join(", "));
        }

        if config.root.as_os_str().is_empty() {
            return Err(ConfigError::MissingRoot);
        }
        let root = Self::resolve_root(&config.root, base);
        config.normalized().with_root(root)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Expand `~` and anchor a relative root at `base`.
    fn resolve_root(root: &Path, base: &Path) -> PathBuf {
        let path = match root.to_str() {
            Some(root) => PathBuf::from(shellexpand::tilde(root).into_owned()),
            None => root.to_path_buf(),
        };
        if path.is_relative() {
            normalize_path(&base.join(path))
        } else {
            path
        }
    }

    /// Apply separator trimming to every subpath.
    fn normalized(mut self) -> Self {
        self.http_root = trim_trailing_separators(&self.http_root);
        self.js_path = trim_separators(&self.js_path);
        self.css_path = trim_separators(&self.css_path);
        self.compiled_folder = trim_separators(&self.compiled_folder);
        self
    }

    // ========================================================================
    // builders
    // ========================================================================

    /// Replace the root directory, validating that it exists.
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(ConfigError::DirectoryDoesNotExist(root.to_path_buf()));
        }
        // Rebuilding from components drops trailing separators
        self.root = root.components().collect();
        Ok(self)
    }

    /// Set the http prefix for generated URLs.
    pub fn with_http_root(mut self, http_root: &str) -> Self {
        self.http_root = trim_trailing_separators(http_root);
        self
    }

    /// Set the scripts folder (relative to root).
    pub fn with_js_path(mut self, path: &str) -> Self {
        self.js_path = trim_separators(path);
        self
    }

    /// Set the stylesheets folder (relative to root).
    pub fn with_css_path(mut self, path: &str) -> Self {
        self.css_path = trim_separators(path);
        self
    }

    /// Set the compiled folder name; empty writes outputs next to the sources.
    pub fn with_compiled_folder(mut self, folder: &str) -> Self {
        self.compiled_folder = trim_separators(folder);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn with_ignore_missing(mut self, ignore_missing: bool) -> Self {
        self.ignore_missing = ignore_missing;
        self
    }

    // ========================================================================
    // accessors
    // ========================================================================

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn http_root(&self) -> &str {
        &self.http_root
    }

    pub fn js_path(&self) -> &str {
        &self.js_path
    }

    pub fn css_path(&self) -> &str {
        &self.css_path
    }

    pub fn compiled_folder(&self) -> &str {
        &self.compiled_folder
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn minify(&self) -> bool {
        self.minify
    }

    pub fn ignore_missing(&self) -> bool {
        self.ignore_missing
    }

    /// Source folder for an asset kind.
    pub fn type_folder(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Js => &self.js_path,
            AssetKind::Css => &self.css_path,
        }
    }

    /// Whether the minified strategies apply (debug always wins).
    pub fn minify_active(&self) -> bool {
        self.minify && !self.debug
    }
}

// ============================================================================
// tests
// ============================================================================
