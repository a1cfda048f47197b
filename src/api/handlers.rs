//! Request handlers for the two generation endpoints

use axum::{body::Bytes, extract::State, Json};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::outfit::{ImagePayload, OutfitOutcome, StyleProfile};
use crate::AppState;

/// Batch endpoint request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub base64: String,
    pub mime_type: String,
    #[serde(default)]
    pub user_profile: StyleProfile,
    pub styles: Vec<String>,
}

/// Batch endpoint response body - always 200, partial failure is visible in
/// the per-outcome fields
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub outfits: Vec<OutfitOutcome>,
}

/// Edit endpoint request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    pub base64: String,
    pub mime_type: String,
    pub prompt: String,
}

/// Edit endpoint response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResponse {
    pub image_url: String,
}

// The body is parsed by hand rather than through axum's Json extractor so a
// malformed payload maps to the endpoints' 500 `{error}` contract instead of
// the extractor's 400/422 rejections.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| AppError::InvalidRequest(e.to_string()))
}

/// POST /generate-outfits
pub async fn generate_outfits(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<BatchResponse>> {
    let request: BatchRequest = parse_body(&body)?;
    let image = ImagePayload::new(request.base64, request.mime_type)?;

    let outfits = state
        .generator
        .generate(&image, &request.user_profile, &request.styles)
        .await?;

    Ok(Json(BatchResponse { outfits }))
}

/// POST /edit-outfit
pub async fn edit_outfit(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<EditResponse>> {
    let request: EditRequest = parse_body(&body)?;
    let image = ImagePayload::new(request.base64, request.mime_type)?;

    let image_url = state.editor.edit(&image, &request.prompt).await?;

    Ok(Json(EditResponse { image_url }))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
