pub mod gemini;
pub mod local;

use crate::errors::ComicError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt::Debug;

/// A trait for interacting with a text-generation model.
///
/// Implementations send a single instruction string and hand back the model's
/// literal text output. They never look inside that output: turning it into
/// structured data is the extractor's job.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, ComicError>;
}

dyn_clone::clone_trait_object!(AiProvider);

#[derive(Deserialize)]
struct UpstreamErrorBody {
    error: UpstreamErrorDetail,
}

#[derive(Deserialize)]
struct UpstreamErrorDetail {
    message: Option<String>,
}

/// Builds a `GenerationService` error from a failed upstream response.
///
/// Both Gemini and OpenAI-compatible servers report failures as
/// `{"error": {"message": "..."}}`; when the body does not have that shape the
/// message falls back to one derived from the status code.
pub(crate) fn upstream_failure(service: &str, status: StatusCode, body: &str) -> ComicError {
    let message = serde_json::from_str::<UpstreamErrorBody>(body)
        .ok()
        .and_then(|b| b.error.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            format!(
                "{service} API request failed with status {}",
                status.as_u16()
            )
        });
    ComicError::GenerationService(message)
}
