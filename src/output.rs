//! Decoding, squaring, compressing and saving generated pictures.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::debug;

use crate::error::GenerateError;

/// Where an item's picture lives: `<root>/<category>/<item>.webp`.
pub fn output_path(root: &Path, category: &str, item: &str) -> PathBuf {
    root.join(category).join(format!("{item}.webp"))
}

/// Decodes image file bytes, guessing the format from the content.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, GenerateError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|err| GenerateError::Decode(image::ImageError::IoError(err)))?;
    debug!("Decoding image, guessed format {:?}", reader.format());
    Ok(reader.decode()?)
}

/// Forces `image` to exactly `size`x`size`.
///
/// Untouched if it's already that size; otherwise stretched with Lanczos3.
pub fn normalize(image: DynamicImage, size: u32) -> DynamicImage {
    if image.dimensions() == (size, size) {
        return image;
    }
    debug!(
        "Resizing {}x{} to {size}x{size}",
        image.width(),
        image.height()
    );
    image.resize_exact(size, size, FilterType::Lanczos3)
}

/// Lossy WebP encoding at `quality` (0-100).
pub fn encode_webp(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, GenerateError> {
    let rgba = image.to_rgba8();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());
    let encoded = encoder
        .encode_simple(false, f32::from(quality))
        .map_err(|err| GenerateError::Encode(format!("{err:?}")))?;
    Ok(encoded.to_vec())
}

/// PNG encoding with no changes to the pixels.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, GenerateError> {
    let mut output = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|err| GenerateError::Encode(err.to_string()))?;
    Ok(output)
}

/// Writes `bytes` to `path`, creating parent directories first.
pub fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)
}

/// The result of saving a picture.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Saved {
    /// File that was written
    pub path: PathBuf,
    /// Pixel width and height of the saved image
    pub dimensions: (u32, u32),
    /// Size of the file on disk
    pub bytes: usize,
}

impl Saved {
    /// Size in whole kilobytes, rounded down.
    pub fn kilobytes(&self) -> usize {
        self.bytes / 1024
    }
}

/// Failure while saving: either the image work or the filesystem.
///
/// Image problems are per-item; filesystem problems end the run.
#[derive(Debug)]
pub enum SaveError {
    /// Decoding or encoding went wrong
    Image(GenerateError),
    /// Creating directories or writing the file went wrong
    Io(std::io::Error),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "Failed to write image: {err}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Image(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<GenerateError> for SaveError {
    fn from(err: GenerateError) -> Self {
        SaveError::Image(err)
    }
}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::Io(err)
    }
}

/// Decodes `bytes`, squares to `size`, encodes as WebP and writes to `path`.
pub fn save_normalized(
    bytes: &[u8],
    path: &Path,
    size: u32,
    quality: u8,
) -> Result<Saved, SaveError> {
    let image = normalize(decode_image(bytes)?, size);
    let encoded = encode_webp(&image, quality)?;
    write_file(path, &encoded)?;
    Ok(Saved {
        path: path.to_path_buf(),
        dimensions: image.dimensions(),
        bytes: encoded.len(),
    })
}

/// Decodes `bytes` and writes them to `path` as PNG at their original size.
pub fn save_raw_png(bytes: &[u8], path: &Path) -> Result<Saved, SaveError> {
    let image = decode_image(bytes)?;
    let encoded = encode_png(&image)?;
    write_file(path, &encoded)?;
    Ok(Saved {
        path: path.to_path_buf(),
        dimensions: image.dimensions(),
        bytes: encoded.len(),
    })
}
