//! Error types for the dummy flash

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or saving an image
#[derive(Debug, Error)]
pub enum ImageError {
    /// I/O error on the image file
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Image path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Image does not fit the emulated chip
    #[error("image is {actual} bytes, chip holds {capacity}")]
    TooLarge {
        /// Image length
        actual: usize,
        /// Chip size
        capacity: usize,
    },
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
