//! Texture pack loading for Halo: MCC.
//!
//! A pack is a set of files sharing a base name:
//! - `name.perm.bin` - Chunk container with texture metadata (and, in some
//!   packs, the pixel data itself)
//! - `name.temp.bin` - Optional raw pixel blob addressed by absolute offsets
//! - `name.perm.idx` - Index file, currently not read
//!
//! Loading parses the container into [`Chunk`]s and joins every texture
//! chunk with its pixel bytes, producing [`ResolvedTexture`]s in file order.
//!
//! # Example
//!
//! ```no_run
//! use mcctex_pack::TexturePack;
//!
//! let pack = TexturePack::open("ui.perm.bin")?;
//! for texture in pack.textures() {
//!     println!("{} {}x{} {}", texture.name, texture.width, texture.height, texture.format);
//! }
//! # Ok::<(), mcctex_pack::Error>(())
//! ```

mod blend;
mod chunk;
mod error;
mod meta;
mod pack;
mod stream;
mod texture;

#[cfg(test)]
mod test_support;

pub use blend::BlendState;
pub use chunk::{
    filler_chunks_for, Chunk, ChunkBody, ChunkHeader, ChunkKind, CHUNK_HEADER_SIZE, MAX_PADDING,
};
pub use error::{Error, Result};
pub use meta::{TextureMeta, TextureMetaLayout};
pub use pack::{
    resolve_absolute, resolve_paired, PackPaths, PairingMode, TexturePack, INDEX_SUFFIX,
    PRIMARY_SUFFIX, SECONDARY_SUFFIX,
};
pub use stream::parse_chunks;
pub use texture::{Provenance, ResolvedTexture, SourceFile};

pub use mcctex_codec::{Raster, TextureFormat};
