//! Outbound request envelope for the multimodal chat-completions API
//!
//! Pure construction: the image rides inline as a data URL next to the
//! instruction text, in a single user message, and both image and text
//! response modalities are requested. Sending and failure handling live in
//! the backend client.

use serde::{Deserialize, Serialize};

use crate::backend::traits::GenerationRequest;
use crate::image::base64 as image_base64;

/// Chat-completions request body
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub modalities: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

/// One part of a multimodal message
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    ImageUrl { image_url: ImageUrl },
    Text { text: String },
}

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Build the envelope for one generation request.
pub fn build(model: &str, request: &GenerationRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: vec![
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image_base64::data_url(&request.mime_type, &request.image_base64),
                    },
                },
                ContentPart::Text {
                    text: request.instruction.clone(),
                },
            ],
        }],
        modalities: vec!["image".to_string(), "text".to_string()],
    }
}

/// Chat-completions response body
///
/// Every field defaults so a missing image reference is detected by lookup,
/// not by a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: ResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub images: Vec<ResponseImage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseImage {
    #[serde(default)]
    pub image_url: Option<ResponseImageUrl>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseImageUrl {
    #[serde(default)]
    pub url: String,
}

impl ChatCompletionResponse {
    /// The image reference of the first choice, if the backend returned one.
    pub fn first_image_url(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .images
            .first()?
            .image_url
            .as_ref()
            .map(|reference| reference.url.as_str())
            .filter(|url| !url.is_empty())
    }
}
