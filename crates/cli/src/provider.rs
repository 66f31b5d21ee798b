use anyhow::{bail, Result};
use clap::Args;
use gleam::providers::ai::{
    gemini::{gemini_api_url, GeminiProvider},
    local::LocalAiProvider,
    AiProvider,
};

/// Generation model settings, from flags or the environment.
#[derive(Args, Debug)]
pub struct ProviderArgs {
    /// "gemini" or "local"
    #[arg(long, env = "AI_PROVIDER", default_value = "gemini")]
    pub provider: String,
    /// Endpoint URL. Derived from the model name for gemini when omitted.
    #[arg(long, env = "AI_API_URL")]
    pub api_url: Option<String>,
    #[arg(long, env = "AI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    #[arg(long, env = "AI_MODEL", default_value = "gemini-1.5-flash")]
    pub model: String,
}

impl ProviderArgs {
    pub fn build(&self) -> Result<Box<dyn AiProvider>> {
        let provider: Box<dyn AiProvider> = match self.provider.as_str() {
            "gemini" => {
                let api_url = self
                    .api_url
                    .clone()
                    .unwrap_or_else(|| gemini_api_url(&self.model));
                // An empty key is rejected by the provider as a configuration error.
                let api_key = self.api_key.clone().unwrap_or_default();
                Box::new(GeminiProvider::new(api_url, api_key)?)
            }
            "local" => {
                let Some(api_url) = self.api_url.clone() else {
                    bail!("AI_API_URL is required for the local provider");
                };
                Box::new(LocalAiProvider::new(
                    api_url,
                    self.api_key.clone(),
                    Some(self.model.clone()),
                )?)
            }
            other => bail!("Unsupported AI provider: {other}"),
        };
        Ok(provider)
    }
}
