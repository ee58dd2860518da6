//! Common utilities for mcctex.
//!
//! This crate provides the foundational pieces shared by the texture pack crates:
//!
//! - [`BinaryReader`] - Zero-copy little-endian reading from byte slices
//! - [`crc`] - CRC-32/MPEG-2 hashing used for texture name hashes

mod error;
mod reader;

pub mod crc;

pub use error::{Error, Result};
pub use reader::{fixed_ascii, BinaryReader};
