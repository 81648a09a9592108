//! Error types for code2art

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for code2art operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while acquiring text or writing the image.
///
/// Rasterization itself never fails; every variant here belongs to one of the
/// I/O collaborators around it.
#[derive(Error, Debug)]
pub enum Error {
    /// The source text could not be opened or read
    #[error("Failed to read {}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The canvas could not be turned into an image
    #[error("Image encoding failed: {0}")]
    EncodingFailure(String),

    /// The destination file could not be created or written
    #[error("Failed to write {}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A zero-area canvas was rejected by the configured policy
    #[error("Refusing to write a {width}x{height} image (input has no visible area)")]
    DegenerateInput { width: usize, height: usize },
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::EncodingFailure(err.to_string())
    }
}
