//! Version 0.7 backends.

pub mod metadata;
pub mod project;
pub mod volume;

pub const VERSION: &str = "v0.7";
