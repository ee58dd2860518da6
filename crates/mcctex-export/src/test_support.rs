//! Texture fixtures for the tests.

use mcctex_pack::{BlendState, Provenance, ResolvedTexture, SourceFile, TextureFormat};

/// An A8R8G8B8 texture one pixel high, as wide as `source` holds pixels.
pub(crate) fn texture(name: &str, name_hash: u32, source: Vec<u8>) -> ResolvedTexture {
    let provenance = Provenance {
        file: SourceFile::Primary,
        offset: 0x10,
        size: source.len() as u64,
    };

    ResolvedTexture {
        name_hash,
        name: name.to_string(),
        format: TextureFormat::A8R8G8B8,
        width: (source.len() / 4) as u16,
        height: 1,
        mip_count: 1,
        depth: 1,
        blend_state: BlendState::NONE,
        media_id: 0,
        source,
        meta_source: provenance,
        data_source: provenance,
    }
}
