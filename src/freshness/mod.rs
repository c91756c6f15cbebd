//! Freshness detection: whole-second mtimes for sources and generated outputs.

pub mod mtime;

pub use mtime::{FileStat, stat, stat_output, to_secs};
