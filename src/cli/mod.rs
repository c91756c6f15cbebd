//! Command-line interface module.

mod args;

pub use args::{Cli, Commands};

use anyhow::{Context, Result, anyhow};
use asset_compiler::config::{AssetConfig, DEFAULT_CONFIG_NAME, find_config_file};
use asset_compiler::debug;
use std::path::Path;

/// Build the configuration: config file first, then CLI overrides.
///
/// Without `--config` the default file is searched upward from cwd; without
/// any file the root is `--root` or the current directory.
pub fn load_config(cli: &Cli) -> Result<AssetConfig> {
    let file = match &cli.config {
        Some(path) => Some(
            find_config_file(path)
                .ok_or_else(|| anyhow!("config file not found: {}", path.display()))?,
        ),
        None => find_config_file(Path::new(DEFAULT_CONFIG_NAME)),
    };

    let mut config = match &file {
        Some(path) => {
            debug!("config"; "loading {}", path.display());
            AssetConfig::load(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None if cli.root.is_some() => AssetConfig::default(),
        None => AssetConfig::new(".")?,
    };

    if let Some(root) = &cli.root {
        config = config.with_root(root)?;
    }
    if let Some(http_root) = &cli.http_root {
        config = config.with_http_root(http_root);
    }
    if let Some(minify) = cli.minify {
        config = config.with_minify(minify);
    }
    if let Some(debug) = cli.debug {
        config = config.with_debug(debug);
    }
    if let Some(ignore_missing) = cli.ignore_missing {
        config = config.with_ignore_missing(ignore_missing);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_then_overrides() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("public")).unwrap();
        let file = dir.path().join("assets.toml");
        fs::write(&file, "root = \"public\"\nminify = true\nhttp_root = \"/static/\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "asset-compiler",
            "-C",
            file.to_str().unwrap(),
            "style",
            "a.css",
            "--debug",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();

        assert_eq!(config.root(), dir.path().join("public").canonicalize().unwrap());
        assert_eq!(config.http_root(), "/static");
        assert!(config.minify());
        assert!(config.debug());
        assert!(!config.minify_active());
    }

    #[test]
    fn test_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("missing.toml");
        let cli = Cli::try_parse_from([
            "asset-compiler",
            "-C",
            file.to_str().unwrap(),
            "script",
            "app.js",
        ])
        .unwrap();

        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn test_nonexistent_root_rejected() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nope");
        let cli = Cli::try_parse_from([
            "asset-compiler",
            "--root",
            root.to_str().unwrap(),
            "script",
            "app.js",
        ])
        .unwrap();

        assert!(load_config(&cli).is_err());
    }
}
