//! CLI parsers
use std::path::PathBuf;

use clap::{Args, Parser};

use crate::constants::{
    DEFAULT_API_BASE, DEFAULT_DELAY_MS, DEFAULT_MODEL, OBJECTS_DIR, TEST_IMAGE_DIR,
};

/// Options shared by both generators for talking to the model.
#[derive(Args, Debug, Clone)]
pub struct ApiOptions {
    #[clap(long)]
    /// API key. When unset, `GOOGLE_API_KEY` then `GEMINI_API_KEY` are used.
    pub api_key: Option<String>,

    #[clap(long, default_value = DEFAULT_MODEL, env = "LEARNPIX_MODEL")]
    /// Image model, defaults to `gemini-3-pro-image-preview`.
    /// Env: LEARNPIX_MODEL
    pub model: String,

    #[clap(long, default_value = DEFAULT_API_BASE, env = "LEARNPIX_API_BASE")]
    /// Base URL of the Gemini API.
    /// Env: LEARNPIX_API_BASE
    pub api_base: String,
}

#[derive(Parser, Debug)]
#[command(name = "learnpix")]
#[command(about = "Generate photorealistic object pictures for the kids learning app")]
/// Batch generator options
pub struct GenerateCli {
    #[clap(long, help = "Enable debug logging", env = "LEARNPIX_DEBUG")]
    /// Enable debug logging. Env: LEARNPIX_DEBUG
    pub debug: bool,

    #[clap(long)]
    /// Generate only this category (eg animals, birds, food, transportation, profession)
    pub category: Option<String>,

    #[clap(long, requires = "category")]
    /// Generate only this item (requires --category)
    pub item: Option<String>,

    #[clap(long)]
    /// Overwrite existing images
    pub force: bool,

    #[clap(long, default_value = OBJECTS_DIR, env = "LEARNPIX_OBJECTS_DIR")]
    /// Output directory, pictures go in `<dir>/<category>/<item>.webp`.
    /// Env: LEARNPIX_OBJECTS_DIR
    pub out_dir: PathBuf,

    #[clap(long, default_value_t = DEFAULT_DELAY_MS)]
    /// Pause between API calls, in milliseconds
    pub delay_ms: u64,

    #[command(flatten)]
    /// Model connection options
    pub api: ApiOptions,
}

#[derive(Parser, Debug)]
#[command(name = "generate_test_image")]
#[command(about = "Generate a single test picture of a lion, saved as-is")]
/// Single-shot test image options
pub struct TestImageCli {
    #[clap(long, help = "Enable debug logging", env = "LEARNPIX_DEBUG")]
    /// Enable debug logging. Env: LEARNPIX_DEBUG
    pub debug: bool,

    #[clap(long, default_value = TEST_IMAGE_DIR, env = "LEARNPIX_TEST_DIR")]
    /// Output directory for the test picture.
    /// Env: LEARNPIX_TEST_DIR
    pub out_dir: PathBuf,

    #[command(flatten)]
    /// Model connection options
    pub api: ApiOptions,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definitions_are_valid() {
        GenerateCli::command().debug_assert();
        TestImageCli::command().debug_assert();
    }

    #[test]
    fn item_requires_category() {
        assert!(GenerateCli::try_parse_from(["learnpix", "--item", "lion"]).is_err());

        let cli = GenerateCli::try_parse_from([
            "learnpix",
            "--category",
            "animals",
            "--item",
            "lion",
            "--force",
        ])
        .unwrap();
        assert_eq!(cli.category.as_deref(), Some("animals"));
        assert_eq!(cli.item.as_deref(), Some("lion"));
        assert!(cli.force);
    }

    #[test]
    fn flags_default_off() {
        let cli = GenerateCli::try_parse_from(["learnpix", "--category", "food"]).unwrap();
        assert!(!cli.force);
        assert!(cli.item.is_none());
        assert_eq!(cli.delay_ms, 1000);
    }
}
