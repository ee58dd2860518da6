//! Texture metadata chunk layout.
//!
//! The payload of a texture chunk is a fixed 0x1D0-byte record. The layout
//! is spelled out once, as [`TextureMetaLayout`], and read in a single
//! zerocopy pass. Offsets below are relative to the end of the 16-byte
//! chunk header.
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0x000 | 0x18 | reserved |
//! | 0x018 | 4 | name hash (CRC-32/MPEG-2 of the upper-cased name) |
//! | 0x01C | 0x14 | reserved |
//! | 0x030 | 4 | secondary identifier |
//! | 0x034 | 0x20 | name, ASCII, null padded |
//! | 0x054 | 8 | reserved |
//! | 0x05C | 4 | pixel format code |
//! | 0x060 | 4 | reserved |
//! | 0x064 | 2 × 4 | width, height, mip count, depth |
//! | 0x06C | 4 | blend state tag |
//! | 0x070 | 8 | reserved |
//! | 0x078 | 8 | pixel data size |
//! | 0x080 | 8 | pixel data offset |
//! | 0x088 | 0x28 | reserved |
//! | 0x0B0 | 4 | media identifier |
//! | 0x0B4 | 0x11C | reserved |

use mcctex_codec::TextureFormat;
use mcctex_common::{crc, fixed_ascii, BinaryReader};
use zerocopy::byteorder::little_endian::{I32, U16, U32, U64};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::{BlendState, Error, Result};

/// On-disk layout of a texture metadata payload.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct TextureMetaLayout {
    pub reserved_000: [u8; 0x18],
    pub name_hash: U32,
    pub reserved_01c: [u8; 0x14],
    pub secondary_id: U32,
    pub name: [u8; 0x20],
    pub reserved_054: [u8; 0x08],
    pub format: I32,
    pub reserved_060: [u8; 0x04],
    pub width: U16,
    pub height: U16,
    pub mip_count: U16,
    pub depth: U16,
    pub blend_state: U32,
    pub reserved_070: U64,
    pub data_size: U64,
    pub data_offset: U64,
    pub reserved_088: [u8; 0x28],
    pub media_id: U32,
    pub reserved_0b4: [u8; 0x11C],
}

const _: () = assert!(std::mem::size_of::<TextureMetaLayout>() == TextureMeta::SIZE);

/// Decoded texture metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureMeta {
    /// CRC-32/MPEG-2 of the upper-cased name, as stored.
    pub name_hash: u32,
    /// Appears constant across packs.
    pub secondary_id: u32,
    pub name: String,
    pub format: TextureFormat,
    pub width: u16,
    pub height: u16,
    pub mip_count: u16,
    pub depth: u16,
    pub blend_state: BlendState,
    pub reserved: u64,
    /// Size of the encoded pixel data in bytes.
    pub data_size: u64,
    /// Absolute offset of the pixel data in the secondary file.
    pub data_offset: u64,
    pub media_id: u32,
}

impl TextureMeta {
    /// Payload size in bytes.
    pub const SIZE: usize = 0x1D0;

    /// Read a metadata payload. `chunk_offset` is only used for errors.
    pub fn read(reader: &mut BinaryReader<'_>, chunk_offset: u64) -> Result<Self> {
        let layout: TextureMetaLayout = reader.read_struct()?;
        Self::from_layout(&layout, chunk_offset)
    }

    /// Decode fields from a raw layout.
    pub fn from_layout(layout: &TextureMetaLayout, chunk_offset: u64) -> Result<Self> {
        let code = layout.format.get();
        let format = TextureFormat::from_code(code).ok_or(Error::UnknownPixelFormat {
            code,
            offset: chunk_offset,
        })?;

        Ok(Self {
            name_hash: layout.name_hash.get(),
            secondary_id: layout.secondary_id.get(),
            name: fixed_ascii(&layout.name),
            format,
            width: layout.width.get(),
            height: layout.height.get(),
            mip_count: layout.mip_count.get(),
            depth: layout.depth.get(),
            blend_state: BlendState(layout.blend_state.get()),
            reserved: layout.reserved_070.get(),
            data_size: layout.data_size.get(),
            data_offset: layout.data_offset.get(),
            media_id: layout.media_id.get(),
        })
    }

    /// Whether the stored name hash matches the hash of the stored name.
    pub fn name_hash_matches(&self) -> bool {
        crc::hash_name(&self.name) == self.name_hash
    }
}
