use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size parameter: {size}. Must be WIDTHxHEIGHT with positive sides")]
    InvalidSize { size: String },

    #[error("JPEG quality must be between 1 and 100, got: {quality}")]
    InvalidQuality { quality: u8 },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error(transparent)]
    Sitekit(#[from] sitekit::Error),
}
