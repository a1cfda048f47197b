//! Common traits and types for image generation backends

use async_trait::async_trait;

use crate::backend::failure::GenerationFailure;

/// A single outbound generation request: one image plus one instruction.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Base64-encoded image payload (without a data-URL prefix)
    pub image_base64: String,

    /// Mime type of the image payload, e.g. `image/png`
    pub mime_type: String,

    /// Free-text instruction sent alongside the image
    pub instruction: String,
}

/// A successfully generated image
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    /// Reference to the generated image (typically a data URL)
    pub image_url: String,
}

/// Trait for image generation backends
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Get the backend name
    fn name(&self) -> &str;

    /// Whether the backend holds the credential it needs to dispatch.
    /// Callers check this before fanning out so a missing credential fails
    /// the whole operation without issuing a single request.
    fn is_configured(&self) -> bool;

    /// Issue one generation request. Every failure is a typed value; this
    /// never panics and never maps transport faults to anything but
    /// [`GenerationFailure`].
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GeneratedImage, GenerationFailure>;
}
