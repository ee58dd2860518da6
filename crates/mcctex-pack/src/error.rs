//! Error types for texture pack parsing and assembly.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a texture pack.
///
/// Every variant is fatal to the load: there is no partial pack.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A chunk declares more bytes than remain in the stream.
    #[error("truncated stream at {offset:#x}: needed {needed} bytes but only {available} available")]
    TruncatedStream {
        offset: u64,
        needed: usize,
        available: usize,
    },

    /// Unrecognized chunk type tag.
    #[error("unknown chunk type {tag:08X} at {offset:#x}")]
    UnknownChunkType { tag: u32, offset: u64 },

    /// Texture metadata declares a pixel format outside the known set.
    #[error("unknown pixel format {code} in texture chunk at {offset:#x}")]
    UnknownPixelFormat { code: i32, offset: u64 },

    /// A chunk declares a negative payload size.
    #[error("invalid chunk size {size} at {offset:#x}")]
    InvalidChunkSize { size: i32, offset: u64 },

    /// The primary container does not exist.
    #[error("texture pack not found: {}", .0.display())]
    MissingContainerFile(PathBuf),

    /// Paired mode found different numbers of texture and texture data chunks.
    #[error("found {textures} texture chunks but {texture_data} texture data chunks")]
    PairingCountMismatch { textures: usize, texture_data: usize },

    /// A texture's declared pixel range does not fit inside its source.
    #[error("pixel data for '{name}' ({len} bytes at {start:#x}) exceeds source of {available} bytes")]
    PixelRangeOutOfBounds {
        name: String,
        start: u64,
        len: u64,
        available: u64,
    },
}

impl From<mcctex_common::Error> for Error {
    fn from(err: mcctex_common::Error) -> Self {
        match err {
            mcctex_common::Error::UnexpectedEof {
                position,
                needed,
                available,
            } => Error::TruncatedStream {
                offset: position as u64,
                needed,
                available,
            },
        }
    }
}

/// Result type for texture pack operations.
pub type Result<T> = std::result::Result<T, Error>;
