//! Walks a catalog selection and generates the missing pictures.
//!
//! One item at a time: check for an existing file, ask the model, save the
//! first image it returns. Model and image failures are counted and the batch
//! moves on; filesystem failures stop it.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, error};

use crate::catalog::{Entry, Selection};
use crate::constants::{
    DEFAULT_DELAY_MS, MODEL_NOTE_MAX_CHARS, OBJECTS_DIR, WEBP_QUALITY, WEBP_SIZE,
};
use crate::error::GenerateError;
use crate::gemini::{ImageGenerator, ResponsePart};
use crate::output::{SaveError, Saved, save_normalized};
use crate::prompt::prompt_for;

const RULE_WIDTH: usize = 50;

/// Knobs for a batch run.
#[derive(Clone, Debug)]
pub struct BatchOptions {
    /// Root the `<category>/<item>.webp` files go under
    pub out_dir: PathBuf,
    /// Regenerate even when the file exists
    pub force: bool,
    /// Pause between remote calls
    pub delay: Duration,
    /// Edge length of the saved square
    pub size: u32,
    /// WebP quality
    pub quality: u8,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(OBJECTS_DIR),
            force: false,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            size: WEBP_SIZE,
            quality: WEBP_QUALITY,
        }
    }
}

/// What happened to one item.
#[derive(Debug)]
pub enum ItemOutcome {
    /// A new picture was written
    Generated(Saved),
    /// The picture already existed and wasn't forced
    Skipped(PathBuf),
    /// The model or image handling failed
    Failed(GenerateError),
}

/// Tally of a batch run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BatchSummary {
    /// Pictures written
    pub generated: usize,
    /// Items left alone because their picture existed
    pub skipped: usize,
    /// Items that didn't get a picture
    pub failed: usize,
}

impl BatchSummary {
    /// Counts one outcome.
    pub fn record(&mut self, outcome: &ItemOutcome) {
        match outcome {
            ItemOutcome::Generated(_) => self.generated += 1,
            ItemOutcome::Skipped(_) => self.skipped += 1,
            ItemOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// True when nothing failed (skips are fine).
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code: 0 without failures, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Whether `entry` needs a remote call under `options`.
pub fn needs_generation(entry: &Entry, options: &BatchOptions) -> std::io::Result<bool> {
    if options.force {
        return Ok(true);
    }
    Ok(!entry.output_path(&options.out_dir).try_exists()?)
}

/// Generates and saves one entry's picture, unconditionally.
///
/// The category directory is created before the remote call. Only filesystem
/// errors come back as `Err`.
pub async fn generate_entry<G: ImageGenerator>(
    generator: &G,
    entry: &Entry,
    options: &BatchOptions,
) -> std::io::Result<ItemOutcome> {
    let label = entry.label();
    let path = entry.output_path(&options.out_dir);
    let prompt = prompt_for(entry.category.name, entry.item.subject);
    debug!("Prompt for {label}: {prompt}");

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).inspect_err(|err| {
            error!("Failed to create {}: {err}", parent.display());
        })?;
    }

    println!("  🎨 Generating {label}...");

    let parts = match generator.generate(&prompt).await {
        Ok(parts) => parts,
        Err(err) => {
            println!("  ❌ Error generating {label}: {err}");
            return Ok(ItemOutcome::Failed(err));
        }
    };

    for part in parts {
        match part {
            ResponsePart::Text(text) => {
                let note: String = text.chars().take(MODEL_NOTE_MAX_CHARS).collect();
                println!("  ℹ  Model note: {note}");
            }
            ResponsePart::Image { mime_type, data } => {
                debug!(
                    "Got {} bytes of {} for {label}",
                    data.len(),
                    mime_type.as_deref().unwrap_or("unknown")
                );
                return match save_normalized(&data, &path, options.size, options.quality) {
                    Ok(saved) => {
                        println!(
                            "  ✅ Saved: {} ({}x{}, {}KB)",
                            saved.path.display(),
                            saved.dimensions.0,
                            saved.dimensions.1,
                            saved.kilobytes()
                        );
                        Ok(ItemOutcome::Generated(saved))
                    }
                    Err(SaveError::Image(err)) => {
                        println!("  ❌ Error generating {label}: {err}");
                        Ok(ItemOutcome::Failed(err))
                    }
                    Err(SaveError::Io(err)) => {
                        error!("Failed to write {}: {err}", path.display());
                        Err(err)
                    }
                };
            }
        }
    }

    println!("  ❌ No image returned for {label}");
    Ok(ItemOutcome::Failed(GenerateError::NoImage))
}

/// Runs every entry in `selection` in catalog order and prints a summary.
pub async fn run_batch<G: ImageGenerator>(
    generator: &G,
    selection: &Selection,
    options: &BatchOptions,
) -> std::io::Result<BatchSummary> {
    let rule = "=".repeat(RULE_WIDTH);
    let mut summary = BatchSummary::default();
    let mut called_remote = false;

    println!(
        "\n📸 Generating {} images across {} categories\n",
        selection.len(),
        selection.category_count()
    );

    for (category, items) in selection.groups() {
        println!("\n{rule}");
        println!(
            "📁 Category: {} ({} items)",
            category.name.to_uppercase(),
            items.len()
        );
        println!("{rule}");

        for item in items {
            let entry = Entry {
                category: *category,
                item: *item,
            };
            let outcome = if needs_generation(&entry, options)? {
                if called_remote && !options.delay.is_zero() {
                    tokio::time::sleep(options.delay).await;
                }
                called_remote = true;
                generate_entry(generator, &entry, options).await?
            } else {
                println!("  ⏭  Skipping {} (exists)", entry.label());
                ItemOutcome::Skipped(entry.output_path(&options.out_dir))
            };
            summary.record(&outcome);
        }
    }

    println!("\n{rule}");
    println!(
        "📊 Results: {} generated, {} skipped, {} failed",
        summary.generated, summary.skipped, summary.failed
    );
    println!("{rule}\n");

    Ok(summary)
}
