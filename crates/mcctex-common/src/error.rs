//! Error types for mcctex-common.

use thiserror::Error;

/// Common error type for mcctex operations.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error(
        "unexpected end of buffer at {position}: needed {needed} bytes but only {available} available"
    )]
    UnexpectedEof {
        position: usize,
        needed: usize,
        available: usize,
    },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
