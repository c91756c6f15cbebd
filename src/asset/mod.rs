//! Asset resolution, bundling and minification.
//!
//! | Module     | Purpose                                               |
//! |------------|-------------------------------------------------------|
//! | `source`   | [`Asset`]: one resolved source file                   |
//! | `compiled` | [`CompiledAsset`]: bundle + rebuild decision          |
//! | `minified` | [`MinifiedAsset`]: `.min` counterpart of one source   |
//! | `minify`   | [`Minifier`]: oxc / lightningcss                      |
//! | `write`    | atomic output writes                                  |

mod compiled;
mod error;
mod kind;
mod minified;
pub mod minify;
mod source;
mod write;

pub use compiled::{BuildState, CompiledAsset};
pub use error::AssetError;
pub use kind::AssetKind;
pub use minified::{MinifiedAsset, minified_name};
pub use minify::Minifier;
pub use source::Asset;

// ============================================================================
// Test Helpers (available to all modules via `use crate::asset::test_*`)
// ============================================================================

#[cfg(test)]
use std::path::Path;

/// Current time in whole seconds.
#[cfg(test)]
pub fn now_secs() -> u64 {
    crate::freshness::to_secs(std::time::SystemTime::now())
}

/// Set a file's mtime to `secs` since the epoch.
#[cfg(test)]
pub fn set_mtime(path: &Path, secs: u64) {
    let time = std::time::UNIX_EPOCH + std::time::Duration::from_secs(secs);
    std::fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

/// Temporary site root with scripts and stylesheets.
///
/// ```text
/// css/test1.css                   body{background:#fff;}   (now - 1000)
/// css/test2.css                   div.full{width:100%;}    (now - 2000)
/// js/test1.js                     console.log("one");      (now - 1000)
/// js/test2.js                     console.log("two");      (now - 2000)
/// alternatecssfoldername/test3.css
/// alternatecssfoldername/test4.css
/// ```
#[cfg(test)]
pub fn test_site() -> (tempfile::TempDir, crate::config::AssetConfig) {
    use std::fs;

    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    let files = [
        ("css/test1.css", "body{background:#fff;}", 1000),
        ("css/test2.css", "div.full{width:100%;}", 2000),
        ("js/test1.js", "console.log(\"one\");", 1000),
        ("js/test2.js", "console.log(\"two\");", 2000),
        ("alternatecssfoldername/test3.css", "p{margin:0;}", 1000),
        ("alternatecssfoldername/test4.css", "a{color:red;}", 2000),
    ];

    let now = now_secs();
    for (name, content, age) in files {
        let path = root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        set_mtime(&path, now - age);
    }

    let config = crate::config::AssetConfig::new(root).unwrap();
    (dir, config)
}
