//! Error handling

use std::fmt;

/// Reasons a single item failed to produce an image.
///
/// None of these stop a batch; the driver counts them and moves on.
#[derive(Debug)]
pub enum GenerateError {
    /// The request never got a response (network, TLS, DNS...)
    Request(reqwest::Error),
    /// The API answered with a non-success status
    Status {
        /// HTTP status returned
        status: reqwest::StatusCode,
        /// Raw response body, usually a JSON error document
        body: String,
    },
    /// The response body wasn't the JSON we expected
    Parse(serde_json::Error),
    /// Inline image data wasn't valid base64
    Base64(base64::DecodeError),
    /// The image bytes couldn't be decoded
    Decode(image::ImageError),
    /// The image couldn't be encoded for saving
    Encode(String),
    /// The model answered without any image part
    NoImage,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(err) => write!(f, "Request to the image API failed: {err}"),
            Self::Status { status, body } => write!(f, "Image API error {status}: {body}"),
            Self::Parse(err) => write!(f, "Failed to parse image API response: {err}"),
            Self::Base64(err) => write!(f, "Failed to base64-decode image: {err}"),
            Self::Decode(err) => write!(f, "Failed to decode image: {err}"),
            Self::Encode(msg) => write!(f, "Failed to encode image: {msg}"),
            Self::NoImage => write!(f, "No image returned"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Base64(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Status { .. } | Self::Encode(_) | Self::NoImage => None,
        }
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        GenerateError::Request(err)
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::Parse(err)
    }
}

impl From<base64::DecodeError> for GenerateError {
    fn from(err: base64::DecodeError) -> Self {
        GenerateError::Base64(err)
    }
}

impl From<image::ImageError> for GenerateError {
    fn from(err: image::ImageError) -> Self {
        GenerateError::Decode(err)
    }
}

/// Problems with the `--category`/`--item` filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// `--item` was given without `--category`
    ItemWithoutCategory,
    /// No category by that name
    UnknownCategory {
        /// What was asked for
        name: String,
        /// Categories that do exist
        valid: Vec<&'static str>,
    },
    /// The category has no item by that name
    UnknownItem {
        /// Category searched
        category: String,
        /// What was asked for
        name: String,
        /// Items that do exist in the category
        valid: Vec<&'static str>,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemWithoutCategory => write!(f, "--item requires --category"),
            Self::UnknownCategory { name, valid } => write!(
                f,
                "Unknown category '{name}', expected one of: {}",
                valid.join(", ")
            ),
            Self::UnknownItem {
                category,
                name,
                valid,
            } => write!(
                f,
                "Unknown item '{name}' in {category}, expected one of: {}",
                valid.join(", ")
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_errors_list_valid_names() {
        let err = SelectionError::UnknownCategory {
            name: "dinosaurs".to_string(),
            valid: vec!["animals", "birds"],
        };
        assert_eq!(
            err.to_string(),
            "Unknown category 'dinosaurs', expected one of: animals, birds"
        );
        assert_eq!(
            SelectionError::ItemWithoutCategory.to_string(),
            "--item requires --category"
        );
    }

    #[test]
    fn status_error_includes_body() {
        let err = GenerateError::Status {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: "quota exhausted".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("quota exhausted"));
    }
}
