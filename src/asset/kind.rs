//! Asset kind definitions.

use std::fmt;
use std::str::FromStr;

use super::AssetError;

/// Kind of static asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// JavaScript, rendered as `<script>`.
    Js,
    /// Stylesheet, rendered as `<link rel="stylesheet">`.
    Css,
}

impl AssetKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Js => "js",
            Self::Css => "css",
        }
    }

    /// Token written before each source when bundling.
    ///
    /// The JS separator terminates a previous file that lacks a trailing `;`.
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Js => "\n;",
            Self::Css => " ",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetKind {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "script" => Ok(Self::Js),
            "css" | "style" => Ok(Self::Css),
            _ => Err(AssetError::UndefinedAssetType(s.to_owned())),
        }
    }
}
