//! Texture pack assembly.
//!
//! A pack is a `.perm.bin` chunk container, optionally accompanied by a
//! `.temp.bin` raw-data blob and a `.perm.idx` index with the same base
//! name. The presence of the blob selects how pixel bytes are located:
//!
//! - **Absolute-offset mode** (`.temp.bin` present): each texture's pixels are
//!   the `[data_offset, data_offset + data_size)` slice of the blob. Texture
//!   data chunks in the container are ignored.
//! - **Paired mode** (no `.temp.bin`): the i-th texture chunk is paired with
//!   the i-th texture data chunk of the container. This positional pairing
//!   holds for every pack seen so far but is not known to be guaranteed by
//!   the format; the index file might describe the real mapping.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::chunk::CHUNK_HEADER_SIZE;
use crate::{
    parse_chunks, Chunk, Error, Provenance, ResolvedTexture, Result, SourceFile, TextureMeta,
};

/// Suffix of the primary chunk container.
pub const PRIMARY_SUFFIX: &str = ".perm.bin";
/// Suffix of the secondary raw-data blob.
pub const SECONDARY_SUFFIX: &str = ".temp.bin";
/// Suffix of the index file. Not read.
pub const INDEX_SUFFIX: &str = ".perm.idx";

/// Paths of the files making up one pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackPaths {
    /// Lower-cased file name without [`PRIMARY_SUFFIX`].
    pub name: String,
    pub primary: PathBuf,
    pub secondary: PathBuf,
    pub index: PathBuf,
}

impl PackPaths {
    /// Derive companion paths from the primary container path.
    pub fn from_primary<P: AsRef<Path>>(primary: P) -> Self {
        let primary = primary.as_ref();
        let dir = primary.parent().unwrap_or_else(|| Path::new(""));

        let file_name = primary
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let name = file_name
            .strip_suffix(PRIMARY_SUFFIX)
            .unwrap_or(&file_name)
            .to_string();

        Self {
            secondary: dir.join(format!("{}{}", name, SECONDARY_SUFFIX)),
            index: dir.join(format!("{}{}", name, INDEX_SUFFIX)),
            primary: primary.to_path_buf(),
            name,
        }
    }
}

/// How pixel bytes were located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PairingMode {
    /// Slices of the secondary blob at declared offsets.
    AbsoluteOffset,
    /// Texture data chunks matched by position.
    Paired,
}

/// A loaded texture pack.
#[derive(Debug, Clone)]
pub struct TexturePack {
    paths: PackPaths,
    mode: PairingMode,
    chunk_count: usize,
    textures: Vec<ResolvedTexture>,
}

impl TexturePack {
    /// Load a pack from the path of its `.perm.bin` container.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let paths = PackPaths::from_primary(path);
        if !paths.primary.is_file() {
            return Err(Error::MissingContainerFile(paths.primary));
        }

        let primary = fs::read(&paths.primary)?;

        if paths.secondary.is_file() {
            let file = File::open(&paths.secondary)?;
            if file.metadata()?.len() == 0 {
                return Self::from_bytes(paths, &primary, Some(&[0u8; 0][..]));
            }
            let mmap = unsafe { Mmap::map(&file)? };
            Self::from_bytes(paths, &primary, Some(&mmap[..]))
        } else {
            Self::from_bytes(paths, &primary, None)
        }
    }

    /// Assemble a pack from already loaded file contents.
    ///
    /// `secondary` selects absolute-offset mode when present.
    pub fn from_bytes(paths: PackPaths, primary: &[u8], secondary: Option<&[u8]>) -> Result<Self> {
        let chunks = parse_chunks(primary)?;

        let (mode, textures) = match secondary {
            Some(blob) => (PairingMode::AbsoluteOffset, resolve_absolute(&chunks, blob)?),
            None => (PairingMode::Paired, resolve_paired(&chunks)?),
        };

        Ok(Self {
            paths,
            mode,
            chunk_count: chunks.len(),
            textures,
        })
    }

    /// Display name of the pack.
    #[inline]
    pub fn name(&self) -> &str {
        &self.paths.name
    }

    #[inline]
    pub fn paths(&self) -> &PackPaths {
        &self.paths
    }

    #[inline]
    pub fn mode(&self) -> PairingMode {
        self.mode
    }

    /// Number of chunks in the primary container.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Textures in container order.
    #[inline]
    pub fn textures(&self) -> &[ResolvedTexture] {
        &self.textures
    }

    /// Consume the pack, keeping its textures.
    pub fn into_textures(self) -> Vec<ResolvedTexture> {
        self.textures
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Find the first texture with this name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&ResolvedTexture> {
        self.textures
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}

/// Provenance of a texture chunk's own payload.
fn meta_provenance(chunk: &Chunk) -> Provenance {
    Provenance {
        file: SourceFile::Primary,
        offset: chunk.header.data_start(),
        size: chunk.header.size1.max(0) as u64,
    }
}

/// Copy `[start, start + len)` out of `source`, or fail with the texture name.
fn slice_pixels(meta: &TextureMeta, source: &[u8], start: u64, len: u64) -> Result<Vec<u8>> {
    let out_of_bounds = || Error::PixelRangeOutOfBounds {
        name: meta.name.clone(),
        start,
        len,
        available: source.len() as u64,
    };

    let end = start.checked_add(len).ok_or_else(out_of_bounds)?;
    if end > source.len() as u64 {
        return Err(out_of_bounds());
    }

    Ok(source[start as usize..end as usize].to_vec())
}

/// Resolve every texture chunk against the secondary blob.
pub fn resolve_absolute(chunks: &[Chunk], secondary: &[u8]) -> Result<Vec<ResolvedTexture>> {
    chunks
        .iter()
        .filter_map(|chunk| chunk.as_texture_meta().map(|meta| (chunk, meta)))
        .map(|(chunk, meta)| {
            let pixels = slice_pixels(meta, secondary, meta.data_offset, meta.data_size)?;
            let data_source = Provenance {
                file: SourceFile::Secondary,
                offset: meta.data_offset + CHUNK_HEADER_SIZE,
                size: meta.data_size,
            };
            Ok(ResolvedTexture::new(
                meta,
                pixels,
                meta_provenance(chunk),
                data_source,
            ))
        })
        .collect()
}

/// Pair texture chunks with texture data chunks by position.
pub fn resolve_paired(chunks: &[Chunk]) -> Result<Vec<ResolvedTexture>> {
    let metas: Vec<_> = chunks
        .iter()
        .filter_map(|chunk| chunk.as_texture_meta().map(|meta| (chunk, meta)))
        .collect();
    let datas: Vec<_> = chunks
        .iter()
        .filter_map(|chunk| chunk.as_texture_data().map(|data| (chunk, data)))
        .collect();

    if metas.len() != datas.len() {
        return Err(Error::PairingCountMismatch {
            textures: metas.len(),
            texture_data: datas.len(),
        });
    }

    metas
        .into_iter()
        .zip(datas)
        .map(|((meta_chunk, meta), (data_chunk, data))| {
            let pixels = slice_pixels(meta, data, 0, meta.data_size)?;
            let data_source = Provenance {
                file: SourceFile::Primary,
                offset: data_chunk.header.data_start(),
                size: data_chunk.header.size1.max(0) as u64,
            };
            Ok(ResolvedTexture::new(
                meta,
                pixels,
                meta_provenance(meta_chunk),
                data_source,
            ))
        })
        .collect()
}
