//! Command Line Interface (CLI) layer for sitekit.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that turns flags and optional JSON
//! config files into pass parameters, runs the pass, and prints its summary.
//!
//! If you are embedding sitekit into another tool, call the library
//! entrypoints in `sitekit::api` instead of the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
