//! Batch outfit generation - bounded fan-out with per-style failure isolation

use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use crate::backend::failure::GenerationFailure;
use crate::backend::traits::{GenerationBackend, GenerationRequest};
use crate::error::{AppError, Result};
use crate::outfit::{prompt, ImagePayload, OutfitOutcome, StyleProfile};

/// Fans out one generation request per requested style and collects every
/// outcome, success or typed failure, into a single list.
pub struct OutfitGenerator {
    backend: Arc<dyn GenerationBackend>,
    permits: Arc<Semaphore>,
}

impl OutfitGenerator {
    /// Create a generator whose fan-out is bounded by `max_concurrent`
    /// in-flight dispatches. The bound is shared across calls, acting as a
    /// process-wide worker pool.
    pub fn new(backend: Arc<dyn GenerationBackend>, max_concurrent: usize) -> Self {
        Self {
            backend,
            permits: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    /// Generate one outfit per style.
    ///
    /// Returns exactly one outcome per input style. A failure on one style
    /// never aborts or affects any sibling; the only error returned here is
    /// the pre-dispatch missing-credential check, which fires before a
    /// single request leaves the process. An empty style list yields an
    /// empty outcome list.
    pub async fn generate(
        &self,
        image: &ImagePayload,
        profile: &StyleProfile,
        styles: &[String],
    ) -> Result<Vec<OutfitOutcome>> {
        if !self.backend.is_configured() {
            return Err(AppError::MissingCredential);
        }

        info!(count = styles.len(), "Generating outfits");

        let tasks = styles.iter().map(|style| {
            let backend = self.backend.clone();
            let permits = self.permits.clone();
            let style = style.clone();
            let request = GenerationRequest {
                image_base64: image.base64.clone(),
                mime_type: image.mime_type.clone(),
                instruction: prompt::compose_instruction(&style, profile),
            };

            async move {
                let _permit = match permits.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        return OutfitOutcome::failure(
                            style,
                            GenerationFailure::generic("Worker pool is unavailable"),
                        );
                    }
                };

                match backend.generate(request).await {
                    Ok(generated) => {
                        info!(style = %style, "Generated outfit");
                        OutfitOutcome::success(style, generated.image_url)
                    }
                    Err(failure) => {
                        warn!(
                            style = %style,
                            kind = ?failure.kind,
                            error = %failure.message,
                            "Outfit generation failed"
                        );
                        OutfitOutcome::failure(style, failure)
                    }
                }
            }
        });

        Ok(join_all(tasks).await)
    }
}
