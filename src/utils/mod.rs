//! Shared helpers: HTML escaping and path/URL manipulation.

pub mod html;
pub mod path;
