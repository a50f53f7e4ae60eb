//! Gemini `generateContent` client for image generation.
//!
//! Docs: <https://ai.google.dev/gemini-api/docs/image-generation>
//!
//! `POST {base}/v1beta/models/{model}:generateContent` with the key in the
//! `x-goog-api-key` header. Text and image parts come back in the first
//! candidate; images are base64 in `inlineData.data`.

use base64::Engine;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{ASPECT_RATIO, IMAGE_SIZE_CLASS, RESPONSE_MODALITIES};
use crate::error::GenerateError;

/// One piece of a model response.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResponsePart {
    /// Commentary from the model, shown but never stored
    Text(String),
    /// Decoded image bytes
    Image {
        /// MIME type the API reported, if any
        mime_type: Option<String>,
        /// Raw (already base64-decoded) image file bytes
        data: Vec<u8>,
    },
}

/// Anything that can turn a prompt into response parts.
///
/// The batch driver is generic over this so it can run without the network.
pub trait ImageGenerator {
    /// Sends one prompt and returns whatever parts came back.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<Vec<ResponsePart>, GenerateError>>;
}

// -----------------------------
// Request body
// -----------------------------

/// Request body for `:generateContent`
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize, Debug)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize, Debug)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: Vec<&'a str>,
    image_config: ImageConfig<'a>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ImageConfig<'a> {
    aspect_ratio: &'a str,
    image_size: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    /// Square, 1K, text+image request for `prompt`.
    pub fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_modalities: RESPONSE_MODALITIES.to_vec(),
                image_config: ImageConfig {
                    aspect_ratio: ASPECT_RATIO,
                    image_size: IMAGE_SIZE_CLASS,
                },
            },
        }
    }
}

// -----------------------------
// Response body
// -----------------------------

/// Response body from `:generateContent`
#[derive(Deserialize, Debug, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    // Missing when generation was blocked.
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default, rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize, Debug)]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, rename = "inlineData", alias = "inline_data")]
    inline_data: Option<InlineData>,
}

#[derive(Deserialize, Debug)]
struct InlineData {
    #[serde(default, rename = "mimeType", alias = "mime_type")]
    mime_type: Option<String>,
    data: String,
}

impl GenerateContentResponse {
    /// Pulls the parts out of the first candidate, decoding any image data.
    ///
    /// No candidates (or a candidate without content) gives an empty list.
    pub fn into_parts(self) -> Result<Vec<ResponsePart>, GenerateError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            debug!("Response had no candidates");
            return Ok(Vec::new());
        };
        if let Some(reason) = &candidate.finish_reason {
            debug!("Candidate finish reason: {reason}");
        }
        let Some(content) = candidate.content else {
            return Ok(Vec::new());
        };

        let mut parts = Vec::with_capacity(content.parts.len());
        for part in content.parts {
            if let Some(inline) = part.inline_data {
                let data = general_purpose::STANDARD.decode(inline.data.as_bytes())?;
                parts.push(ResponsePart::Image {
                    mime_type: inline.mime_type,
                    data,
                });
            } else if let Some(text) = part.text {
                parts.push(ResponsePart::Text(text));
            }
        }
        Ok(parts)
    }
}

// -----------------------------
// Client
// -----------------------------

/// Talks to the hosted Gemini API.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    /// Builds a client for `model` at `api_base`.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_base: api_base.into(),
        }
    }

    /// Model this client asks for.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full URL of the generate endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

impl ImageGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Vec<ResponsePart>, GenerateError> {
        let url = self.endpoint();
        debug!("POST {url}");

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await?;
        debug!("Response {status}, {} bytes", bytes.len());
        if !status.is_success() {
            return Err(GenerateError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        parsed.into_parts()
    }
}
