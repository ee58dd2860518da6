//! Forward-only chunk stream parsing.

use mcctex_common::BinaryReader;

use crate::{Chunk, Result};

/// Parse a whole container into its chunks, in file order.
///
/// Each chunk's offset depends on every earlier chunk having been consumed
/// exactly, so the first unknown tag, bad size or short read fails the whole
/// parse and no chunks are returned.
pub fn parse_chunks(data: &[u8]) -> Result<Vec<Chunk>> {
    let mut reader = BinaryReader::new(data);
    let mut chunks = Vec::new();

    while !reader.is_empty() {
        chunks.push(Chunk::read(&mut reader)?);
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StreamBuilder;
    use crate::{ChunkHeader, ChunkKind, Error};

    fn mixed_stream() -> Vec<u8> {
        StreamBuilder::new()
            .filler(ChunkHeader::shader(0x24))
            .filler(ChunkHeader::shader_data(0x31))
            .texture("ui_a", 1, 8, 8, 32, 0)
            .texture("ui_b", 0, 2, 2, 16, 0)
            .filler(ChunkHeader::padding(0x3F0))
            .filler(ChunkHeader::alignment(0x210))
            .texture_data(&[0x11; 32])
            .filler(ChunkHeader::reflect(3))
            .filler(ChunkHeader::zero(0))
            .texture_data(&[0x22; 16])
            .build()
    }

    #[test]
    fn test_empty_stream() {
        assert!(parse_chunks(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_chunks_cover_stream_exactly() {
        let bytes = mixed_stream();
        let chunks = parse_chunks(&bytes).unwrap();
        assert_eq!(chunks.len(), 10);

        let mut expected_offset = 0;
        for chunk in &chunks {
            assert_eq!(chunk.header.file_offset, expected_offset);
            expected_offset += chunk.consumed_len();
        }
        assert_eq!(expected_offset, bytes.len() as u64);
    }

    #[test]
    fn test_chunk_order_preserved() {
        let chunks = parse_chunks(&mixed_stream()).unwrap();
        let kinds: Vec<_> = chunks.iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ChunkKind::Shader,
                ChunkKind::ShaderData,
                ChunkKind::TextureMeta,
                ChunkKind::TextureMeta,
                ChunkKind::Padding,
                ChunkKind::Alignment,
                ChunkKind::TextureData,
                ChunkKind::Reflect,
                ChunkKind::Zero,
                ChunkKind::TextureData,
            ]
        );
    }

    #[test]
    fn test_unknown_tag_fails_whole_parse() {
        let good = mixed_stream();
        let bytes = StreamBuilder::new()
            .raw(&good)
            .raw(&[0x78, 0x56, 0x34, 0x12, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
            .build();

        let err = parse_chunks(&bytes).unwrap_err();
        match err {
            Error::UnknownChunkType { tag, offset } => {
                assert_eq!(tag, 0x12345678);
                assert_eq!(offset, good.len() as u64);
            }
            other => panic!("expected UnknownChunkType, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_payload() {
        let mut bytes = StreamBuilder::new().texture_data(&[0u8; 8]).build();
        bytes.truncate(bytes.len() - 1);

        let err = parse_chunks(&bytes).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedStream {
                offset: 0x10,
                needed: 8,
                available: 7
            }
        ));
    }

    #[test]
    fn test_truncated_header() {
        let bytes = StreamBuilder::new().texture_data(&[1]).raw(&[0xD7, 0xCD]).build();
        assert!(matches!(
            parse_chunks(&bytes),
            Err(Error::TruncatedStream { .. })
        ));
    }
}
