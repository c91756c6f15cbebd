//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization and separator trimming
//! - [`route`]: URL joining for http paths

pub mod fs;
pub mod route;

pub use fs::{normalize_path, trim_separators, trim_trailing_separators};
pub use route::join_url;
