//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, regex and JSON errors, and provides semantic
//! variants for argument validation and per-file processing failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Reference image not found: {}", path.display())]
    ReferenceNotFound { path: PathBuf },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Not valid UTF-8: {}", path.display())]
    Encoding { path: PathBuf },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
