//! One-off: ask the model for a single lion picture and save it untouched.
//!
//! Useful for eyeballing the style before running a full batch.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use learnpix::cli::TestImageCli;
use learnpix::config::{resolve_api_key, setup_logging};
use learnpix::gemini::GeminiClient;
use learnpix::single_shot::generate_test_image;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = TestImageCli::parse();

    // Failures are reported by setup_logging itself.
    setup_logging(cli.debug).ok();

    let api_key = resolve_api_key(cli.api.api_key.as_deref())
        .ok_or_else(|| anyhow!("Set GOOGLE_API_KEY or GEMINI_API_KEY (or pass --api-key)"))?;
    let client = GeminiClient::new(api_key, &cli.api.model, &cli.api.api_base);

    generate_test_image(&client, &cli.out_dir)
        .await
        .context("Test image generation failed")?;

    Ok(())
}
