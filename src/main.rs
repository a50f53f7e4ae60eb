//! Generate photorealistic pictures for the objects section.
//!
//! ```text
//! learnpix                                   # everything
//! learnpix --category animals                # one category
//! learnpix --category animals --item lion    # one item
//! learnpix --force                           # overwrite existing pictures
//! ```

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use learnpix::batch::{BatchOptions, run_batch};
use learnpix::catalog::Selection;
use learnpix::cli::GenerateCli;
use learnpix::config::{resolve_api_key, setup_logging};
use learnpix::gemini::GeminiClient;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = GenerateCli::parse();

    // Failures are reported by setup_logging itself.
    setup_logging(cli.debug).ok();

    let selection = Selection::new(cli.category.as_deref(), cli.item.as_deref())?;

    let api_key = resolve_api_key(cli.api.api_key.as_deref())
        .ok_or_else(|| anyhow!("Set GOOGLE_API_KEY or GEMINI_API_KEY (or pass --api-key)"))?;
    let client = GeminiClient::new(api_key, &cli.api.model, &cli.api.api_base);
    debug!("Using model {} at {}", client.model(), client.endpoint());

    let options = BatchOptions {
        out_dir: cli.out_dir,
        force: cli.force,
        delay: Duration::from_millis(cli.delay_ms),
        ..Default::default()
    };

    let summary = run_batch(&client, &selection, &options)
        .await
        .with_context(|| format!("Failed writing under {}", options.out_dir.display()))?;

    Ok(ExitCode::from(summary.exit_code()))
}
