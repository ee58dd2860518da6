//! Single and bulk texture export.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{ColorType, ImageFormat};
use mcctex_pack::ResolvedTexture;
use parking_lot::Mutex;
use rayon::prelude::*;

use crate::{output_stems, CancellationToken, Error, Result};

/// What gets written for each texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// The decoded raster as an RGBA PNG.
    #[default]
    Png,
    /// The still-encoded source bytes.
    Raw,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Raw => "bin",
        }
    }
}

/// Options for [`export_all`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Cancel the remaining items after the first failure.
    pub fail_fast: bool,
}

/// A texture that could not be written.
#[derive(Debug)]
pub struct ExportFailure {
    pub name: String,
    pub cause: Error,
}

/// How a bulk export ended.
#[derive(Debug)]
pub enum ExportOutcome {
    /// Every item was attempted.
    Completed {
        written: usize,
        failures: Vec<ExportFailure>,
    },
    /// Cancellation stopped the export before every item was attempted.
    /// Files already written stay on disk.
    Cancelled {
        written: usize,
        failures: Vec<ExportFailure>,
    },
}

impl ExportOutcome {
    /// Number of files written.
    pub fn written(&self) -> usize {
        match self {
            Self::Completed { written, .. } | Self::Cancelled { written, .. } => *written,
        }
    }

    /// Items that failed, in texture order.
    pub fn failures(&self) -> &[ExportFailure] {
        match self {
            Self::Completed { failures, .. } | Self::Cancelled { failures, .. } => failures,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Write one texture to `path` as a PNG or a raw dump.
pub fn export_texture<P: AsRef<Path>>(
    texture: &ResolvedTexture,
    path: P,
    format: ExportFormat,
) -> Result<()> {
    match format {
        ExportFormat::Png => {
            let raster = texture.decode()?;
            image::save_buffer_with_format(
                path,
                &raster.to_rgba(),
                raster.width(),
                raster.height(),
                ColorType::Rgba8,
                ImageFormat::Png,
            )?;
        }
        ExportFormat::Raw => fs::write(path, &texture.source)?,
    }
    Ok(())
}

/// Export every texture into `output_dir`, decoding in parallel.
///
/// Files are named by [`output_stems`]. Cancellation is checked before each
/// item; a failed item is recorded and the export moves on. The progress
/// callback receives (completed, total) counts after every attempted item.
pub fn export_all<P: AsRef<Path>, F>(
    textures: &[ResolvedTexture],
    output_dir: P,
    options: ExportOptions,
    cancel: &CancellationToken,
    mut progress: F,
) -> Result<ExportOutcome>
where
    F: FnMut(usize, usize) + Send,
{
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let paths: Vec<PathBuf> = output_stems(textures)
        .into_iter()
        .map(|stem| output_dir.join(format!("{}.{}", stem, options.format.extension())))
        .collect();
    let total = textures.len();

    let completed = AtomicUsize::new(0);
    let written = AtomicUsize::new(0);
    let failures = Mutex::new(Vec::new());
    let progress = Mutex::new(&mut progress);

    textures
        .par_iter()
        .zip(paths.par_iter())
        .enumerate()
        .for_each(|(index, (texture, path))| {
            if cancel.is_cancelled() {
                return;
            }

            match export_texture(texture, path, options.format) {
                Ok(()) => {
                    written.fetch_add(1, Ordering::Relaxed);
                }
                Err(cause) => {
                    if options.fail_fast {
                        cancel.cancel();
                    }
                    let name = texture.name.clone();
                    failures.lock().push((index, ExportFailure { name, cause }));
                }
            }

            // Count under the lock so reports arrive in order
            let mut report = progress.lock();
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            (*report)(done, total);
        });

    let mut failures = failures.into_inner();
    failures.sort_by_key(|(index, _)| *index);
    let failures = failures.into_iter().map(|(_, failure)| failure).collect();

    let written = written.into_inner();
    if completed.into_inner() < total {
        Ok(ExportOutcome::Cancelled { written, failures })
    } else {
        Ok(ExportOutcome::Completed { written, failures })
    }
}
