//! Core building blocks: image trimming/resizing/padding pipeline and save helpers,
//! certificate name matching, and CSS substitution rules. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
pub mod rename;
pub mod rewrite;
