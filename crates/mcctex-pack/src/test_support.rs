//! Builders for synthetic chunk streams used by the tests.

use mcctex_common::crc;

use crate::{BlendState, ChunkHeader, ChunkKind, TextureMeta};

/// A texture metadata payload with the given fields and fixed filler values
/// for the rest.
pub(crate) fn meta_payload(
    name: &str,
    format: i32,
    width: u16,
    height: u16,
    data_size: u64,
    data_offset: u64,
) -> Vec<u8> {
    let mut bytes = vec![0u8; TextureMeta::SIZE];
    bytes[0x18..0x1C].copy_from_slice(&crc::hash_name(name).to_le_bytes());
    bytes[0x30..0x34].copy_from_slice(&0x1122_3344u32.to_le_bytes());
    bytes[0x34..0x34 + name.len()].copy_from_slice(name.as_bytes());
    bytes[0x5C..0x60].copy_from_slice(&format.to_le_bytes());
    bytes[0x64..0x66].copy_from_slice(&width.to_le_bytes());
    bytes[0x66..0x68].copy_from_slice(&height.to_le_bytes());
    bytes[0x68..0x6A].copy_from_slice(&3u16.to_le_bytes());
    bytes[0x6A..0x6C].copy_from_slice(&1u16.to_le_bytes());
    bytes[0x6C..0x70].copy_from_slice(&BlendState::ADDITIVE.value().to_le_bytes());
    bytes[0x78..0x80].copy_from_slice(&data_size.to_le_bytes());
    bytes[0x80..0x88].copy_from_slice(&data_offset.to_le_bytes());
    bytes[0xB0..0xB4].copy_from_slice(&0xCAFE_F00Du32.to_le_bytes());
    bytes
}

fn header(kind: ChunkKind, size1: i32) -> ChunkHeader {
    ChunkHeader {
        file_offset: 0,
        kind,
        size1,
        size2: size1,
        unknown: 0,
    }
}

/// Appends chunks to an in-memory container.
#[derive(Debug, Default)]
pub(crate) struct StreamBuilder {
    bytes: Vec<u8>,
}

impl StreamBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A texture chunk with the given metadata fields.
    pub(crate) fn texture(
        self,
        name: &str,
        format: i32,
        width: u16,
        height: u16,
        data_size: u64,
        data_offset: u64,
    ) -> Self {
        let payload = meta_payload(name, format, width, height, data_size, data_offset);
        self.texture_with_size1(&payload, TextureMeta::SIZE as i32)
    }

    pub(crate) fn texture_with_size1(mut self, payload: &[u8], size1: i32) -> Self {
        self.bytes
            .extend_from_slice(&header(ChunkKind::TextureMeta, size1).to_bytes());
        self.bytes.extend_from_slice(payload);
        self
    }

    pub(crate) fn texture_data(mut self, data: &[u8]) -> Self {
        self.bytes
            .extend_from_slice(&header(ChunkKind::TextureData, data.len() as i32).to_bytes());
        self.bytes.extend_from_slice(data);
        self
    }

    /// A filler chunk with a 0xBF-filled payload of `size1` bytes.
    pub(crate) fn filler(mut self, header: ChunkHeader) -> Self {
        self.bytes.extend_from_slice(&header.to_bytes());
        self.bytes
            .resize(self.bytes.len() + header.size1.max(0) as usize, 0xBF);
        self
    }

    pub(crate) fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub(crate) fn build(self) -> Vec<u8> {
        self.bytes
    }
}
