//! Chunk records of the texture pack container.
//!
//! Every record starts with a 16-byte header:
//!
//! ```text
//! [tag: u32][size1: i32][size2: i32][unknown: i32][payload]
//! ```
//!
//! Texture chunks carry a fixed-layout [`TextureMeta`] payload; every other
//! kind carries exactly `size1` payload bytes.

use mcctex_common::BinaryReader;

use crate::{Error, Result, TextureMeta};

/// Size of the common chunk header, tag included.
pub const CHUNK_HEADER_SIZE: u64 = 0x10;

/// Largest payload a single padding chunk holds before an alignment
/// chunk takes over.
pub const MAX_PADDING: i32 = 0x3F0;

/// Recognized chunk kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    TextureMeta,
    TextureData,
    /// Filled with 0xBF.
    Padding,
    /// Filled with zeros; rounds the following chunk up to 0x1000.
    Alignment,
    Reflect,
    /// The all-zero tag. Skipped like [`Reflect`](Self::Reflect); whether the
    /// payload really is opaque is unconfirmed.
    Zero,
    Shader,
    ShaderData,
}

impl ChunkKind {
    /// Tag dispatch table. Any tag not listed fails the parse.
    pub const TAGS: [(u32, ChunkKind); 8] = [
        (0xCDBFA090, ChunkKind::TextureMeta),
        (0x5E73CDD7, ChunkKind::TextureData),
        (0xDEADB0FF, ChunkKind::Padding),
        (0xC9DC5F62, ChunkKind::Alignment),
        (0x616A903F, ChunkKind::Reflect),
        (0x00000000, ChunkKind::Zero),
        (0x0C46AEEF, ChunkKind::Shader),
        (0x985BE50C, ChunkKind::ShaderData),
    ];

    /// Look up the kind for a type tag.
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::TAGS
            .iter()
            .find(|(known, _)| *known == tag)
            .map(|(_, kind)| *kind)
    }

    /// The type tag of this kind.
    pub fn tag(self) -> u32 {
        Self::TAGS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(tag, _)| *tag)
            .unwrap_or_default()
    }
}

/// The common header of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Absolute position of the type tag.
    pub file_offset: u64,
    pub kind: ChunkKind,
    pub size1: i32,
    pub size2: i32,
    pub unknown: i32,
}

impl ChunkHeader {
    /// Position of the first payload byte.
    #[inline]
    pub fn data_start(&self) -> u64 {
        self.file_offset + CHUNK_HEADER_SIZE
    }

    /// The chunk's type tag.
    #[inline]
    pub fn tag(&self) -> u32 {
        self.kind.tag()
    }

    /// `size1` as a payload length, rejecting negative values.
    pub fn payload_len(&self) -> Result<usize> {
        usize::try_from(self.size1).map_err(|_| Error::InvalidChunkSize {
            size: self.size1,
            offset: self.file_offset,
        })
    }

    /// Serialize the header as it appears on disk.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&self.tag().to_le_bytes());
        bytes[4..8].copy_from_slice(&self.size1.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.size2.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.unknown.to_le_bytes());
        bytes
    }

    fn filler(kind: ChunkKind, size: i32, size2: i32, unknown: i32) -> Self {
        Self {
            file_offset: 0,
            kind,
            size1: size,
            size2,
            unknown,
        }
    }

    /// Header of a padding chunk holding `size` bytes.
    pub fn padding(size: i32) -> Self {
        Self::filler(ChunkKind::Padding, size, size, 0)
    }

    /// Header of an alignment chunk; its `unknown` field repeats the size.
    pub fn alignment(size: i32) -> Self {
        Self::filler(ChunkKind::Alignment, size, size, size)
    }

    pub fn reflect(size: i32) -> Self {
        Self::filler(ChunkKind::Reflect, size, size, 0)
    }

    pub fn zero(size: i32) -> Self {
        Self::filler(ChunkKind::Zero, size, -1, -1)
    }

    pub fn shader(size: i32) -> Self {
        Self::filler(ChunkKind::Shader, size, size, 0)
    }

    pub fn shader_data(size: i32) -> Self {
        Self::filler(ChunkKind::ShaderData, size, size, 0)
    }
}

/// Filler headers covering `pad` bytes: one padding chunk up to
/// [`MAX_PADDING`], then an alignment chunk for the remainder.
///
/// Not used by any write path yet.
pub fn filler_chunks_for(pad: i32) -> Vec<ChunkHeader> {
    if pad <= MAX_PADDING {
        vec![ChunkHeader::padding(pad)]
    } else {
        vec![
            ChunkHeader::padding(MAX_PADDING),
            ChunkHeader::alignment(pad - MAX_PADDING),
        ]
    }
}

/// Decoded chunk payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkBody {
    TextureMeta(Box<TextureMeta>),
    /// Raw encoded pixels, exactly `size1` bytes.
    TextureData(Vec<u8>),
    /// Payload consumed but not interpreted.
    Skipped,
}

/// One parsed chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub header: ChunkHeader,
    pub body: ChunkBody,
}

impl Chunk {
    /// Read one chunk, starting at its type tag.
    pub fn read(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let file_offset = reader.position() as u64;
        let tag = reader.read_u32()?;
        let kind = ChunkKind::from_tag(tag).ok_or(Error::UnknownChunkType {
            tag,
            offset: file_offset,
        })?;

        let header = ChunkHeader {
            file_offset,
            kind,
            size1: reader.read_i32()?,
            size2: reader.read_i32()?,
            unknown: reader.read_i32()?,
        };

        let body = match kind {
            ChunkKind::TextureMeta => {
                ChunkBody::TextureMeta(Box::new(TextureMeta::read(reader, file_offset)?))
            }
            ChunkKind::TextureData => {
                ChunkBody::TextureData(reader.read_bytes(header.payload_len()?)?.to_vec())
            }
            ChunkKind::Padding
            | ChunkKind::Alignment
            | ChunkKind::Reflect
            | ChunkKind::Zero
            | ChunkKind::Shader
            | ChunkKind::ShaderData => {
                reader.skip(header.payload_len()?)?;
                ChunkBody::Skipped
            }
        };

        Ok(Self { header, body })
    }

    #[inline]
    pub fn kind(&self) -> ChunkKind {
        self.header.kind
    }

    /// Total bytes this chunk occupied in the stream, header included.
    pub fn consumed_len(&self) -> u64 {
        let payload = match self.header.kind {
            ChunkKind::TextureMeta => TextureMeta::SIZE as u64,
            _ => self.header.size1.max(0) as u64,
        };
        CHUNK_HEADER_SIZE + payload
    }

    /// The metadata payload, for texture chunks.
    pub fn as_texture_meta(&self) -> Option<&TextureMeta> {
        match &self.body {
            ChunkBody::TextureMeta(meta) => Some(meta),
            _ => None,
        }
    }

    /// The raw pixel payload, for texture data chunks.
    pub fn as_texture_data(&self) -> Option<&[u8]> {
        match &self.body {
            ChunkBody::TextureData(data) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{meta_payload, StreamBuilder};

    #[test]
    fn test_tag_table_round_trip() {
        for (tag, kind) in ChunkKind::TAGS {
            assert_eq!(ChunkKind::from_tag(tag), Some(kind));
            assert_eq!(kind.tag(), tag);
        }
        assert_eq!(ChunkKind::from_tag(0x12345678), None);
    }

    #[test]
    fn test_header_layout() {
        let header = ChunkHeader::alignment(0x20);
        assert_eq!(
            header.to_bytes(),
            [
                0x62, 0x5F, 0xDC, 0xC9, 0x20, 0, 0, 0, 0x20, 0, 0, 0, 0x20, 0, 0, 0
            ]
        );
        assert_eq!(ChunkHeader::zero(4).to_bytes()[8..], [0xFF; 8]);
    }

    #[test]
    fn test_read_texture_data() {
        let bytes = StreamBuilder::new().texture_data(&[1, 2, 3]).build();
        let mut reader = BinaryReader::new(&bytes);
        let chunk = Chunk::read(&mut reader).unwrap();

        assert_eq!(chunk.kind(), ChunkKind::TextureData);
        assert_eq!(chunk.header.data_start(), 0x10);
        assert_eq!(chunk.as_texture_data(), Some(&[1u8, 2, 3][..]));
        assert_eq!(chunk.consumed_len(), 19);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_texture_meta_uses_fixed_length() {
        // size1 on texture chunks is not the payload length
        let payload = meta_payload("foo", 1, 4, 4, 8, 0);
        let bytes = StreamBuilder::new().texture_with_size1(&payload, 0x7777).build();
        let mut reader = BinaryReader::new(&bytes);
        let chunk = Chunk::read(&mut reader).unwrap();

        assert_eq!(chunk.as_texture_meta().map(|m| m.name.as_str()), Some("foo"));
        assert_eq!(chunk.consumed_len(), 0x10 + 0x1D0);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_zero_chunk_skips_payload() {
        let bytes = StreamBuilder::new()
            .filler(ChunkHeader::zero(5))
            .texture_data(&[9])
            .build();
        let mut reader = BinaryReader::new(&bytes);

        let zero = Chunk::read(&mut reader).unwrap();
        assert_eq!(zero.kind(), ChunkKind::Zero);
        assert_eq!(zero.body, ChunkBody::Skipped);
        assert_eq!(zero.header.size2, -1);

        let data = Chunk::read(&mut reader).unwrap();
        assert_eq!(data.header.file_offset, 0x15);
    }

    #[test]
    fn test_negative_size() {
        let bytes = StreamBuilder::new().filler(ChunkHeader::padding(-4)).build();
        let err = Chunk::read(&mut BinaryReader::new(&bytes)).unwrap_err();
        assert!(matches!(err, Error::InvalidChunkSize { size: -4, offset: 0 }));
    }

    #[test]
    fn test_filler_chunks_for() {
        assert_eq!(filler_chunks_for(0x100), vec![ChunkHeader::padding(0x100)]);
        assert_eq!(filler_chunks_for(0x3F0), vec![ChunkHeader::padding(0x3F0)]);
        assert_eq!(
            filler_chunks_for(0x500),
            vec![ChunkHeader::padding(0x3F0), ChunkHeader::alignment(0x110)]
        );
    }
}
