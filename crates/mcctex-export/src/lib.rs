//! Texture export for MCC texture packs.
//!
//! Writes resolved textures to disk either as decoded PNGs or as raw dumps
//! of their still-encoded bytes. Bulk export decodes on the rayon pool,
//! reports `(completed, total)` progress, honours a [`CancellationToken`]
//! between items and collects per-item failures instead of aborting.
//!
//! # Example
//!
//! ```no_run
//! use mcctex_export::{export_all, CancellationToken, ExportOptions};
//! use mcctex_pack::TexturePack;
//!
//! let pack = TexturePack::open("ui.perm.bin")?;
//! let outcome = export_all(
//!     pack.textures(),
//!     "out",
//!     ExportOptions::default(),
//!     &CancellationToken::new(),
//!     |done, total| println!("{}/{}", done, total),
//! )?;
//! println!("wrote {} files", outcome.written());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod cancel;
mod error;
mod export;
mod naming;

#[cfg(test)]
mod test_support;

pub use cancel::CancellationToken;
pub use error::{Error, Result};
pub use export::{
    export_all, export_texture, ExportFailure, ExportFormat, ExportOptions, ExportOutcome,
};
pub use naming::output_stems;
