//! Resolved textures: metadata joined with its encoded pixel bytes.

use std::fmt;

use mcctex_codec::{Raster, TextureFormat};

use crate::{BlendState, TextureMeta};

/// Which pack file a byte range came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceFile {
    /// The `.perm.bin` container.
    Primary,
    /// The `.temp.bin` raw-data blob.
    Secondary,
}

impl SourceFile {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "perm.bin",
            Self::Secondary => "temp.bin",
        }
    }
}

/// A byte range in one of the pack files, kept for diagnostics and naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Provenance {
    pub file: SourceFile,
    pub offset: u64,
    pub size: u64,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, 0x{:X} : 0x{:X}",
            self.file.label(),
            self.offset,
            self.size
        )
    }
}

/// One texture of a loaded pack.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolvedTexture {
    pub name_hash: u32,
    pub name: String,
    pub format: TextureFormat,
    pub width: u16,
    pub height: u16,
    pub mip_count: u16,
    pub depth: u16,
    pub blend_state: BlendState,
    pub media_id: u32,
    /// Encoded pixel bytes, `data_size` long.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub source: Vec<u8>,
    /// Where the metadata chunk came from.
    pub meta_source: Provenance,
    /// Where the pixel bytes came from.
    pub data_source: Provenance,
}

impl ResolvedTexture {
    pub(crate) fn new(
        meta: &TextureMeta,
        source: Vec<u8>,
        meta_source: Provenance,
        data_source: Provenance,
    ) -> Self {
        Self {
            name_hash: meta.name_hash,
            name: meta.name.clone(),
            format: meta.format,
            width: meta.width,
            height: meta.height,
            mip_count: meta.mip_count,
            depth: meta.depth,
            blend_state: meta.blend_state,
            media_id: meta.media_id,
            source,
            meta_source,
            data_source,
        }
    }

    /// Decode the top mip level into a BGRA raster.
    ///
    /// Formats without a decoder produce a raw passthrough image.
    pub fn decode(&self) -> mcctex_codec::Result<Raster> {
        mcctex_codec::decode(
            &self.source,
            self.format,
            self.width as u32,
            self.height as u32,
        )
    }

    /// Whether the stored name hash matches the stored name.
    pub fn name_hash_matches(&self) -> bool {
        mcctex_common::crc::hash_name(&self.name) == self.name_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provenance_display() {
        let provenance = Provenance {
            file: SourceFile::Secondary,
            offset: 0x1A2B0,
            size: 0x400,
        };
        assert_eq!(provenance.to_string(), "temp.bin, 0x1A2B0 : 0x400");
    }
}
