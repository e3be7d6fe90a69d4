//! Error types

use thiserror::Error;

/// Main error type for the Central360 backend
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid release metadata: {0}")]
    ReleaseMetadata(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
