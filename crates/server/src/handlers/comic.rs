//! # Comic Generation Handler

use super::{AppError, AppState};
use crate::types::{ComicResponse, GenerateComicRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use gleam::ComicError;
use tracing::info;

/// Turns an article (raw text or URL) into a four-panel narrative.
///
/// A missing credential is reported before the request body is validated. A body
/// that is not valid JSON, or has the wrong field types, is invalid input.
pub async fn generate_comic_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<GenerateComicRequest>, JsonRejection>,
) -> Result<Json<ComicResponse>, AppError> {
    let pipeline = app_state.pipeline.as_ref().ok_or_else(|| {
        ComicError::Configuration("Google API key is not configured.".to_string())
    })?;

    let Json(payload) = payload.map_err(|rejection| {
        ComicError::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    info!(
        style = %payload.style,
        aspect_ratio = %payload.aspect_ratio,
        "Received comic generation request."
    );

    let narrative = pipeline
        .run(&payload.article, &payload.style, &payload.aspect_ratio)
        .await?;

    Ok(Json(ComicResponse {
        narrative,
        images: Vec::new(),
    }))
}
