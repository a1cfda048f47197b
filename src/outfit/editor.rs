//! Single-image editing - one dispatch, one typed result

use std::sync::Arc;
use tracing::info;

use crate::backend::traits::{GenerationBackend, GenerationRequest};
use crate::error::{AppError, Result};
use crate::outfit::ImagePayload;

/// Edits one outfit image with a literal free-text instruction.
pub struct OutfitEditor {
    backend: Arc<dyn GenerationBackend>,
}

impl OutfitEditor {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Apply `instruction` to the image and return the edited image reference.
    ///
    /// The instruction is sent as-is, with no template composition. A typed
    /// failure is returned as [`AppError::Generation`] so the transport layer
    /// can map its kind to a status code.
    pub async fn edit(&self, image: &ImagePayload, instruction: &str) -> Result<String> {
        if !self.backend.is_configured() {
            return Err(AppError::MissingCredential);
        }

        let request = GenerationRequest {
            image_base64: image.base64.clone(),
            mime_type: image.mime_type.clone(),
            instruction: instruction.to_string(),
        };

        let generated = self.backend.generate(request).await?;
        info!("Edited outfit image");
        Ok(generated.image_url)
    }
}
