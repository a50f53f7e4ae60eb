//! Shared constants for the generators
//!

/// The default place batch images go, relative to the project root
pub const OBJECTS_DIR: &str = "./public/objects";

/// The default place the single-shot test image goes
pub const TEST_IMAGE_DIR: &str = "./public/test";

/// File name used by the single-shot test image
pub const TEST_IMAGE_FILENAME: &str = "lion_realistic.png";

/// Gemini model used for every request unless overridden
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Base URL of the Gemini API
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Environment variables checked for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];

/// Aspect ratio requested from the model
pub const ASPECT_RATIO: &str = "1:1";

/// Resolution class requested from the model
pub const IMAGE_SIZE_CLASS: &str = "1K";

/// Modalities requested from the model
pub const RESPONSE_MODALITIES: [&str; 2] = ["TEXT", "IMAGE"];

/// Edge length (pixels) of every saved WebP
pub const WEBP_SIZE: u32 = 1024;

/// Lossy WebP quality (0-100)
pub const WEBP_QUALITY: u8 = 80;

/// Pause between remote calls, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// How much of a model text note gets printed
pub const MODEL_NOTE_MAX_CHARS: usize = 100;
