use thiserror::Error;

use crate::release::error::SourceError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Release not found: {0}")]
    ReleaseNotFound(String),

    #[error("No version given to fetch")]
    MissingVersion,

    #[error("Invalid release id: {0}")]
    InvalidId(String),

    #[error("Failed to write to destination: {0}")]
    Io(#[from] std::io::Error),
}
