//! mcctex CLI - Command-line tool for Halo: MCC texture pack extraction.
//!
//! This is the main entry point for the mcctex command-line application.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use crossbeam_channel::unbounded;
use glob::{MatchOptions, Pattern};
use indicatif::{ProgressBar, ProgressStyle};

use mcctex::export::{output_stems, ExportOutcome};
use mcctex::prelude::*;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// mcctex - Halo: MCC texture pack extraction tool
#[derive(Parser)]
#[command(name = "mcctex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List textures in a pack
    List {
        /// Path to the .perm.bin file
        #[arg(short, long, env = "MCCTEX_PACK")]
        pack: PathBuf,

        /// Filter by name (substring, or glob-style if it contains * ? [)
        #[arg(short, long)]
        filter: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a summary of a pack
    Info {
        /// Path to the .perm.bin file
        #[arg(short, long, env = "MCCTEX_PACK")]
        pack: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export all (or filtered) textures of a pack
    Export {
        /// Path to the .perm.bin file
        #[arg(short, long, env = "MCCTEX_PACK")]
        pack: PathBuf,

        /// Output directory
        #[arg(short, long, env = "MCCTEX_OUTPUT")]
        output: PathBuf,

        /// Filter by name (substring, or glob-style if it contains * ? [)
        #[arg(short, long)]
        filter: Option<String>,

        /// Write the encoded source bytes instead of PNGs
        #[arg(long)]
        raw: bool,

        /// Number of decode threads (0 = automatic)
        #[arg(short, long, default_value_t = 0)]
        jobs: usize,

        /// Stop at the first texture that fails to export
        #[arg(long)]
        fail_fast: bool,
    },

    /// Export a single texture by name
    ExportOne {
        /// Path to the .perm.bin file
        #[arg(short, long, env = "MCCTEX_PACK")]
        pack: PathBuf,

        /// Texture name (case-insensitive)
        #[arg(short, long)]
        name: String,

        /// Output file (defaults to <name>.png or <name>.bin)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the encoded source bytes instead of a PNG
        #[arg(long)]
        raw: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { pack, filter, json } => {
            cmd_list(&pack, filter.as_deref(), json)?;
        }
        Commands::Info { pack, json } => {
            cmd_info(&pack, json)?;
        }
        Commands::Export {
            pack,
            output,
            filter,
            raw,
            jobs,
            fail_fast,
        } => {
            let options = ExportOptions {
                format: export_format(raw),
                fail_fast,
            };
            cmd_export(&pack, &output, filter.as_deref(), options, jobs)?;
        }
        Commands::ExportOne {
            pack,
            name,
            output,
            raw,
        } => {
            cmd_export_one(&pack, &name, output.as_deref(), export_format(raw))?;
        }
    }

    Ok(())
}

fn export_format(raw: bool) -> ExportFormat {
    if raw {
        ExportFormat::Raw
    } else {
        ExportFormat::Png
    }
}

fn open_pack(path: &Path) -> Result<TexturePack> {
    TexturePack::open(path)
        .with_context(|| format!("Failed to open texture pack {}", path.display()))
}

fn cmd_list(path: &Path, filter: Option<&str>, json: bool) -> Result<()> {
    let pack = open_pack(path)?;
    let filter = filter.map(TextureFilter::new).transpose()?;

    let textures: Vec<&ResolvedTexture> = pack
        .textures()
        .iter()
        .filter(|t| filter.as_ref().map_or(true, |f| f.matches(&t.name)))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&textures)?);
        return Ok(());
    }

    for texture in &textures {
        println!(
            "{:<40} {:<10} {:>5}x{:<5} {:>2} mips  {:<20} {}",
            texture.name,
            texture.format,
            texture.width,
            texture.height,
            texture.mip_count,
            texture.blend_state,
            texture.data_source
        );
    }

    println!("\nTotal: {} textures", textures.len());

    Ok(())
}

fn cmd_info(path: &Path, json: bool) -> Result<()> {
    let start = Instant::now();
    let pack = open_pack(path)?;
    let elapsed = start.elapsed();

    let mut formats: BTreeMap<&'static str, usize> = BTreeMap::new();
    for texture in pack.textures() {
        *formats.entry(texture.format.name()).or_default() += 1;
    }
    let undecodable = pack
        .textures()
        .iter()
        .filter(|t| !t.format.is_decodable())
        .count();
    let hash_mismatches: Vec<&str> = pack
        .textures()
        .iter()
        .filter(|t| !t.name_hash_matches())
        .map(|t| t.name.as_str())
        .collect();

    let paths = pack.paths();

    if json {
        let info = serde_json::json!({
            "name": pack.name(),
            "mode": pack.mode(),
            "chunks": pack.chunk_count(),
            "textures": pack.len(),
            "formats": formats,
            "passthrough": undecodable,
            "hash_mismatches": hash_mismatches,
            "secondary_present": paths.secondary.is_file(),
            "index_present": paths.index.is_file(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Pack: {} (loaded in {:?})", pack.name(), elapsed);
    println!("Mode: {:?}", pack.mode());
    println!("Chunks: {}", pack.chunk_count());
    println!("Textures: {}", pack.len());
    for (format, count) in &formats {
        println!("  {:<10} {}", format, count);
    }
    if undecodable > 0 {
        println!("Passthrough (no decoder): {}", undecodable);
    }
    if !hash_mismatches.is_empty() {
        println!("Name hash mismatches: {}", hash_mismatches.join(", "));
    }
    println!(
        "Index file: {}",
        if paths.index.is_file() { "present (not read)" } else { "absent" }
    );

    Ok(())
}

/// SIGINT handler: stop starting new items and let the export report
/// what it already wrote.
fn interrupt_handler(cancel: CancellationToken) -> impl FnMut() + Send + 'static {
    move || {
        if !cancel.is_cancelled() {
            eprintln!("\nCancelling...");
        }
        cancel.cancel();
    }
}

/// Messages sent from the export worker.
enum ExportMessage {
    Progress { done: usize, total: usize },
    Finished(mcctex::export::Result<ExportOutcome>),
}

fn cmd_export(
    path: &Path,
    output: &Path,
    filter: Option<&str>,
    options: ExportOptions,
    jobs: usize,
) -> Result<()> {
    if jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    println!("Opening texture pack: {}", path.display());

    let start = Instant::now();
    let pack = open_pack(path)?;

    println!(
        "Loaded {} textures ({:?} mode) in {:?}",
        pack.len(),
        pack.mode(),
        start.elapsed()
    );

    let filter = filter.map(TextureFilter::new).transpose()?;
    let textures: Vec<ResolvedTexture> = pack
        .into_textures()
        .into_iter()
        .filter(|t| filter.as_ref().map_or(true, |f| f.matches(&t.name)))
        .collect();

    println!("Exporting {} textures to {}...", textures.len(), output.display());

    let pb = ProgressBar::new(textures.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)?
            .progress_chars("#>-"),
    );

    let (sender, receiver) = unbounded();
    let cancel = CancellationToken::new();
    ctrlc::set_handler(interrupt_handler(cancel.clone()))
        .context("Failed to install Ctrl-C handler")?;

    let worker = {
        let output = output.to_path_buf();
        let cancel = cancel.clone();
        thread::spawn(move || {
            let progress = sender.clone();
            let result = export_all(&textures, &output, options, &cancel, |done, total| {
                progress.send(ExportMessage::Progress { done, total }).ok();
            });
            sender.send(ExportMessage::Finished(result)).ok();
        })
    };

    let start = Instant::now();
    let mut result = None;
    for message in receiver {
        match message {
            ExportMessage::Progress { done, total } => {
                pb.set_length(total as u64);
                pb.set_position(done as u64);
            }
            ExportMessage::Finished(finished) => result = Some(finished),
        }
    }

    worker
        .join()
        .map_err(|_| anyhow!("Export worker panicked"))?;
    let outcome = result
        .ok_or_else(|| anyhow!("Export worker exited without a result"))?
        .context("Failed to export textures")?;

    for failure in outcome.failures() {
        eprintln!("Error exporting {}: {}", failure.name, failure.cause);
    }

    if outcome.is_cancelled() {
        pb.abandon_with_message("Cancelled");
        println!(
            "Export cancelled after {} files in {:?} ({} errors)",
            outcome.written(),
            start.elapsed(),
            outcome.failures().len()
        );
    } else {
        pb.finish_with_message("Done");
        println!(
            "Exported {} textures in {:?} ({} errors)",
            outcome.written(),
            start.elapsed(),
            outcome.failures().len()
        );
    }

    if !outcome.failures().is_empty() {
        anyhow::bail!("{} textures failed to export", outcome.failures().len());
    }

    Ok(())
}

fn cmd_export_one(
    path: &Path,
    name: &str,
    output: Option<&Path>,
    format: ExportFormat,
) -> Result<()> {
    let pack = open_pack(path)?;
    let texture = pack
        .find(name)
        .with_context(|| format!("No texture named '{}' in {}", name, pack.name()))?;

    let output = match output {
        Some(output) => output.to_path_buf(),
        None => {
            let stem = output_stems(std::slice::from_ref(texture)).remove(0);
            PathBuf::from(format!("{}.{}", stem, format.extension()))
        }
    };

    println!(
        "Exporting {} ({} {}x{}, {}) -> {}",
        texture.name,
        texture.format,
        texture.width,
        texture.height,
        texture.data_source,
        output.display()
    );
    if format == ExportFormat::Png && !texture.format.is_decodable() {
        eprintln!("Warning: {} has no decoder, writing raw passthrough pixels", texture.format);
    }

    export_texture(texture, &output, format)
        .with_context(|| format!("Failed to export {}", texture.name))?;

    println!("Export complete");

    Ok(())
}

/// Name filter for texture selection.
enum TextureFilter {
    /// Case-insensitive substring, stored lower-cased.
    Substring(String),
    Glob(Pattern),
}

impl TextureFilter {
    fn new(pattern: &str) -> Result<Self> {
        if pattern.contains(['*', '?', '[']) {
            let glob = Pattern::new(pattern)
                .with_context(|| format!("Invalid filter pattern '{}'", pattern))?;
            Ok(Self::Glob(glob))
        } else {
            Ok(Self::Substring(pattern.to_lowercase()))
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Substring(needle) => name.to_lowercase().contains(needle.as_str()),
            Self::Glob(pattern) => pattern.matches_with(
                name,
                MatchOptions {
                    case_sensitive: false,
                    ..MatchOptions::new()
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_filter_ignores_case() {
        let filter = TextureFilter::new("Reticle").unwrap();
        assert!(filter.matches("hud_RETICLE_small"));
        assert!(!filter.matches("hud_compass"));
    }

    #[test]
    fn test_glob_filter() {
        let filter = TextureFilter::new("HUD_*").unwrap();
        assert!(filter.matches("hud_reticle"));
        assert!(!filter.matches("menu_hud_bg"));
    }

    #[test]
    fn test_interrupt_cancels_export() {
        let cancel = CancellationToken::new();
        let mut handler = interrupt_handler(cancel.clone());
        assert!(!cancel.is_cancelled());

        handler();
        assert!(cancel.is_cancelled());

        handler();
        assert!(cancel.is_cancelled());
    }

    #[test]
    fn test_invalid_glob() {
        assert!(TextureFilter::new("[unclosed").is_err());
    }
}
