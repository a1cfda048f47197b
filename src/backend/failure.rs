//! Failure classification for backend responses
//!
//! A pure mapping from transport-level observations (HTTP status, response
//! body shape) to a small failure taxonomy. Kept free of any transport code
//! so it is independently testable, and propagated end-to-end as a structured
//! field so callers never re-derive the cause from message text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cause of a failed generation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transient backend throttling (HTTP 429)
    RateLimited,
    /// The caller's usage allotment is depleted (HTTP 402)
    QuotaExhausted,
    /// Any other failure, including a success status without an image
    Generic,
}

/// A typed per-dispatch failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenerationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl GenerationFailure {
    pub fn rate_limited() -> Self {
        Self {
            kind: FailureKind::RateLimited,
            message: "Rate limit exceeded. Please try again later.".to_string(),
        }
    }

    pub fn quota_exhausted() -> Self {
        Self {
            kind: FailureKind::QuotaExhausted,
            message: "AI credits depleted. Please add credits to continue.".to_string(),
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Generic,
            message: message.into(),
        }
    }

    /// A success status whose body carried no image reference
    pub fn no_image() -> Self {
        Self::generic("No image returned from backend")
    }
}

/// Classify a non-success backend response by status code.
///
/// Precedence is fixed: 429 before 402 before everything else. The body is
/// only used to enrich the generic message; classification never depends on
/// request content.
pub fn classify(status: u16, body: &str) -> GenerationFailure {
    match status {
        429 => GenerationFailure::rate_limited(),
        402 => GenerationFailure::quota_exhausted(),
        _ => {
            let detail = body.trim();
            if detail.is_empty() {
                GenerationFailure::generic(format!("Backend returned status {}", status))
            } else {
                GenerationFailure::generic(format!(
                    "Backend returned status {}: {}",
                    status,
                    truncate(detail, 200)
                ))
            }
        }
    }
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
