//! Error types for pixel decoding.

use thiserror::Error;

use crate::TextureFormat;

/// Errors that can occur when decoding pixel data.
#[derive(Debug, Error)]
pub enum Error {
    /// The encoded data is shorter than the declared dimensions require.
    #[error("truncated {format} pixel data: needed {needed} bytes, got {available}")]
    TruncatedPixelData {
        format: TextureFormat,
        needed: usize,
        available: usize,
    },
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;
