//! Asset resolution and generation errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving or generating assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A referenced source does not exist and missing files are not tolerated.
    #[error("resource missing: `{0}`")]
    ResourceMissing(PathBuf),

    #[error("undefined asset type `{0}` (expected `js` or `css`)")]
    UndefinedAssetType(String),

    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}
