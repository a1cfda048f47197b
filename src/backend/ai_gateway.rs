//! HTTP client for the external AI generation gateway

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::backend::failure::{classify, GenerationFailure};
use crate::backend::request::{self, ChatCompletionResponse};
use crate::backend::traits::{GeneratedImage, GenerationBackend, GenerationRequest};
use crate::config::BackendConfig;
use crate::error::{AppError, Result};

/// Backend speaking the OpenAI-compatible chat-completions protocol of the
/// AI gateway, carrying a multimodal image model.
pub struct AiGatewayBackend {
    name: String,
    client: Client,
    url: String,
    model: String,
    api_key: Option<String>,
}

impl AiGatewayBackend {
    /// Create a new gateway backend from configuration
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            name: "ai-gateway".to_string(),
            client,
            url: config.url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl GenerationBackend for AiGatewayBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GeneratedImage, GenerationFailure> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| GenerationFailure::generic("Backend API key is not configured"))?;

        let envelope = request::build(&self.model, &request);

        debug!(backend = %self.name, model = %self.model, "Sending generation request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| GenerationFailure::generic(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                backend = %self.name,
                status = status.as_u16(),
                "Backend rejected generation request"
            );
            return Err(classify(status.as_u16(), &body));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationFailure::generic(format!("Failed to parse response: {}", e)))?;

        match completion.first_image_url() {
            Some(url) => Ok(GeneratedImage {
                image_url: url.to_string(),
            }),
            None => {
                warn!(backend = %self.name, "Backend response carried no image");
                Err(GenerationFailure::no_image())
            }
        }
    }
}
