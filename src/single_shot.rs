//! The one-picture smoke test: a lion in the test style, saved untouched.

use std::path::Path;

use tracing::debug;

use crate::constants::TEST_IMAGE_FILENAME;
use crate::gemini::{ImageGenerator, ResponsePart};
use crate::output::{SaveError, Saved, save_raw_png};
use crate::prompt::{TEST_STYLE, build_prompt};

/// Subject of the test picture.
pub const SUBJECT: &str = "lion standing majestically, full body visible";

/// Asks for the test picture and writes every image part to
/// `<out_dir>/lion_realistic.png`.
///
/// A response without any image is not an error; it returns `Ok(None)` and
/// writes nothing.
pub async fn generate_test_image<G: ImageGenerator>(
    generator: &G,
    out_dir: &Path,
) -> Result<Option<Saved>, SaveError> {
    let prompt = build_prompt(TEST_STYLE, SUBJECT);
    println!("Generating image for: {SUBJECT}");
    println!("Prompt: {prompt}");

    let parts = generator.generate(&prompt).await?;
    let output_path = out_dir.join(TEST_IMAGE_FILENAME);

    let mut last_saved = None;
    for part in parts {
        match part {
            ResponsePart::Text(text) => println!("Model text: {text}"),
            ResponsePart::Image { data, .. } => {
                let saved = save_raw_png(&data, &output_path)?;
                println!(
                    "Saved: {} ({}x{})",
                    saved.path.display(),
                    saved.dimensions.0,
                    saved.dimensions.1
                );
                last_saved = Some(saved);
            }
        }
    }

    if last_saved.is_none() {
        debug!("No image part in the response, nothing written");
    }
    Ok(last_saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use crate::output::encode_png;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::cell::RefCell;

    struct Canned {
        parts: Vec<ResponsePart>,
        prompts: RefCell<Vec<String>>,
    }

    impl Canned {
        fn new(parts: Vec<ResponsePart>) -> Self {
            Self {
                parts,
                prompts: RefCell::default(),
            }
        }
    }

    impl ImageGenerator for Canned {
        async fn generate(&self, prompt: &str) -> Result<Vec<ResponsePart>, GenerateError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok(self.parts.clone())
        }
    }

    fn image_part(width: u32, height: u32) -> ResponsePart {
        let image =
            DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([90, 60, 30])));
        ResponsePart::Image {
            mime_type: Some("image/png".to_string()),
            data: encode_png(&image).unwrap(),
        }
    }

    #[tokio::test]
    async fn text_only_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Canned::new(vec![ResponsePart::Text("No lions today.".to_string())]);

        let saved = generate_test_image(&generator, dir.path()).await.unwrap();

        assert!(saved.is_none());
        assert!(!dir.path().join(TEST_IMAGE_FILENAME).exists());
        assert_eq!(generator.prompts.borrow().len(), 1);
    }

    #[tokio::test]
    async fn image_is_saved_at_original_size() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Canned::new(vec![
            ResponsePart::Text("Here is a lion.".to_string()),
            image_part(40, 30),
        ]);

        let saved = generate_test_image(&generator, dir.path())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(saved.path, dir.path().join(TEST_IMAGE_FILENAME));
        assert_eq!(saved.dimensions, (40, 30));
        assert!(generator.prompts.borrow()[0].contains("a lion standing majestically"));
    }

    #[tokio::test]
    async fn generation_errors_are_returned() {
        struct Failing;
        impl ImageGenerator for Failing {
            async fn generate(&self, _prompt: &str) -> Result<Vec<ResponsePart>, GenerateError> {
                Err(GenerateError::NoImage)
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let result = generate_test_image(&Failing, dir.path()).await;
        assert!(matches!(result, Err(SaveError::Image(GenerateError::NoImage))));
    }
}
