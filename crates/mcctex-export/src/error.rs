//! Error types for texture export.

use thiserror::Error;

/// Errors that can occur while exporting a single texture.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel decoding failed.
    #[error("decode error: {0}")]
    Codec(#[from] mcctex_codec::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, Error>;
