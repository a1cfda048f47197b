//! Caller-side aggregation of batch outcomes
//!
//! The batch endpoint answers 200 even when individual styles failed, so the
//! consumer filters outcomes itself. These helpers implement that contract:
//! keep the successes, and when nothing succeeded, surface the most specific
//! failure kind found across the batch.

use crate::backend::failure::{FailureKind, GenerationFailure};
use crate::outfit::OutfitOutcome;

/// Keep only successful outcomes.
///
/// When zero outcomes succeeded, the error is the most specific failure in
/// the batch: any rate-limit failure wins over quota exhaustion, which wins
/// over the generic fallback. Selection uses the structured kind, never the
/// message text.
pub fn filter_successful(
    outcomes: Vec<OutfitOutcome>,
) -> std::result::Result<Vec<OutfitOutcome>, GenerationFailure> {
    let (successes, failures): (Vec<_>, Vec<_>) =
        outcomes.into_iter().partition(OutfitOutcome::is_success);

    if !successes.is_empty() {
        return Ok(successes);
    }

    Err(most_specific_failure(&failures))
}

fn most_specific_failure(failures: &[OutfitOutcome]) -> GenerationFailure {
    if failures
        .iter()
        .any(|outcome| outcome.kind() == Some(FailureKind::RateLimited))
    {
        return GenerationFailure::rate_limited();
    }
    if failures
        .iter()
        .any(|outcome| outcome.kind() == Some(FailureKind::QuotaExhausted))
    {
        return GenerationFailure::quota_exhausted();
    }
    GenerationFailure::generic("Failed to generate any outfits. Please try again.")
}
