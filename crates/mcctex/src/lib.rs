//! mcctex - Halo: MCC texture pack extraction library.
//!
//! This crate provides a unified interface to the mcctex crates for reading
//! `.perm.bin` / `.temp.bin` texture packs and exporting their contents.
//!
//! # Crates
//!
//! - [`mcctex_common`] - Common utilities (binary reading, CRC-32/MPEG-2 name hashing)
//! - [`mcctex_codec`] - Pixel decoding (A8R8G8B8, DXT1/3/5) into BGRA rasters
//! - [`mcctex_pack`] - Chunk stream parsing and texture pack assembly
//! - [`mcctex_export`] - PNG and raw export with progress and cancellation
//!
//! # Example
//!
//! ```no_run
//! use mcctex::prelude::*;
//!
//! let pack = TexturePack::open("ui.perm.bin")?;
//! if let Some(texture) = pack.find("hud_reticle") {
//!     let raster = texture.decode()?;
//!     println!("{}x{} from {}", raster.width(), raster.height(), texture.data_source);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use mcctex_codec as codec;
pub use mcctex_common as common;
pub use mcctex_export as export;
pub use mcctex_pack as pack;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use mcctex_codec::{decode, Raster, TextureFormat};
    pub use mcctex_common::{crc, BinaryReader};
    pub use mcctex_export::{
        export_all, export_texture, CancellationToken, ExportFormat, ExportOptions, ExportOutcome,
    };
    pub use mcctex_pack::{BlendState, PairingMode, ResolvedTexture, TexturePack};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
