//! Outfit generation domain - fan-out batch generation, single-image editing,
//! prompt composition, and the caller-side aggregation contract

pub mod aggregate;
pub mod batch;
pub mod editor;
pub mod prompt;

use serde::{Deserialize, Serialize};

use crate::backend::failure::{FailureKind, GenerationFailure};
use crate::error::{AppError, Result};
use crate::image::base64 as image_base64;

/// The garment image a caller submits, validated once at the boundary.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub base64: String,
    pub mime_type: String,
}

impl ImagePayload {
    /// Validate that the payload can be embedded in a data URI.
    pub fn new(base64: String, mime_type: String) -> Result<Self> {
        if mime_type.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "Image mime type cannot be empty".to_string(),
            ));
        }
        if !image_base64::is_valid(&base64) {
            return Err(AppError::InvalidRequest(
                "Image payload is not valid base64".to_string(),
            ));
        }
        Ok(Self { base64, mime_type })
    }
}

/// A caller's style preferences, used only to compose instruction text.
///
/// Wire field names follow the client contract; `disliked` holds free text
/// describing colors, patterns, or items to keep out of generated outfits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleProfile {
    pub preferred_styles: Vec<String>,
    pub favorite_colors: String,
    pub disliked: String,
}

/// Per-style result of one generation attempt.
///
/// Success always carries a non-empty image reference; a failure never does.
/// The structured `kind` travels with the message so callers filter on it
/// instead of matching message substrings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutfitOutcome {
    Success {
        style: String,
        #[serde(rename = "imageUrl")]
        image_url: String,
    },
    Failure {
        style: String,
        error: String,
        kind: FailureKind,
    },
}

impl OutfitOutcome {
    pub fn success(style: String, image_url: String) -> Self {
        Self::Success { style, image_url }
    }

    pub fn failure(style: String, failure: GenerationFailure) -> Self {
        Self::Failure {
            style,
            error: failure.message,
            kind: failure.kind,
        }
    }

    pub fn style(&self) -> &str {
        match self {
            Self::Success { style, .. } | Self::Failure { style, .. } => style,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure kind, if this outcome failed.
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }
}
