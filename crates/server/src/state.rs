//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The `AppState` holds the configuration, the
//! shared HTTP client and the comic pipeline wired to the configured model.

use crate::config::AppConfig;
use gleam::{
    providers::ai::{
        gemini::{gemini_api_url, GeminiProvider},
        local::LocalAiProvider,
        AiProvider,
    },
    ArticleResolver, ComicPipeline, ComicPipelineBuilder,
};
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, warn};

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml` and the environment.
    pub config: Arc<AppConfig>,
    /// The pipeline, or `None` when the provider credential is missing.
    pub pipeline: Option<Arc<ComicPipeline>>,
    /// A shared client for article and news retrieval.
    pub http_client: Client,
}

/// Builds the shared application state from the configuration.
///
/// A Gemini provider without an API key leaves the pipeline unset instead of
/// failing, so the server still starts and reports the problem per request.
/// An unknown provider type, or a local provider without a URL, is fatal.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let http_client = Client::builder().build()?;
    let provider_config = &config.provider;

    let ai_provider: Option<Box<dyn AiProvider>> = match provider_config.provider.as_str() {
        "gemini" => match provider_config.api_key.clone() {
            Some(api_key) => {
                // If api_url is not provided in config, construct it from the model name.
                let api_url = provider_config
                    .api_url
                    .clone()
                    .unwrap_or_else(|| gemini_api_url(&provider_config.model_name));
                Some(Box::new(GeminiProvider::new(api_url, api_key)?))
            }
            None => {
                warn!("No API key configured for the gemini provider; comic generation is disabled.");
                None
            }
        },
        "local" => {
            // For local providers, the URL is always required.
            let api_url = provider_config.api_url.clone().ok_or_else(|| {
                anyhow::anyhow!("api_url is required for the local provider")
            })?;
            Some(Box::new(LocalAiProvider::new(
                api_url,
                provider_config.api_key.clone(),
                Some(provider_config.model_name.clone()),
            )?))
        }
        other => {
            return Err(anyhow::anyhow!("Unsupported AI provider: {other}"));
        }
    };

    let pipeline = match ai_provider {
        Some(ai_provider) => {
            info!(
                provider = %provider_config.provider,
                model = %provider_config.model_name,
                "Comic pipeline ready."
            );
            let pipeline = ComicPipelineBuilder::new()
                .ai_provider(ai_provider)
                .resolver(ArticleResolver::with_client(http_client.clone()))
                .build()?;
            Some(Arc::new(pipeline))
        }
        None => None,
    };

    Ok(AppState {
        config: Arc::new(config),
        pipeline,
        http_client,
    })
}
