//! Error types for icon generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing an icon
#[derive(Error, Debug)]
pub enum Error {
    /// The output file could not be created or written
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The canvas could not be encoded as PNG
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from the filesystem rather than the encoder
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }
}
