//! Outfit Generation Gateway
//!
//! A Rust service that fans out garment styling requests to an external
//! multimodal image-generation backend and aggregates per-style outcomes,
//! tolerating partial failure.

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod image;
pub mod outfit;

pub use error::{AppError, Result};

use std::sync::Arc;

use backend::ai_gateway::AiGatewayBackend;
use backend::traits::GenerationBackend;
use outfit::batch::OutfitGenerator;
use outfit::editor::OutfitEditor;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: config::Settings,
    pub generator: OutfitGenerator,
    pub editor: OutfitEditor,
}

impl AppState {
    /// Build the state with the real AI gateway backend.
    pub fn new(settings: config::Settings) -> Result<Self> {
        let backend: Arc<dyn GenerationBackend> =
            Arc::new(AiGatewayBackend::new(&settings.backend)?);
        Ok(Self::with_backend(settings, backend))
    }

    /// Build the state around an arbitrary backend implementation.
    pub fn with_backend(
        settings: config::Settings,
        backend: Arc<dyn GenerationBackend>,
    ) -> Self {
        let generator = OutfitGenerator::new(backend.clone(), settings.backend.max_concurrent);
        let editor = OutfitEditor::new(backend);
        Self {
            settings,
            generator,
            editor,
        }
    }
}
