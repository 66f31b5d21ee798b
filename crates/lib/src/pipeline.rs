//! # Comic Pipeline
//!
//! Sequences resolution, prompt composition, generation, extraction and assembly.
//! Either a complete [`Narrative`] comes out or a single [`ComicError`] does; there
//! is no partial result.

use crate::{
    article::ArticleResolver,
    assemble::assemble_narrative,
    errors::ComicError,
    extract::extract_narrative,
    prompts::{compose_comic_prompt, PROMPT_VERSION},
    providers::ai::AiProvider,
    types::{GenerationRequest, Narrative},
};
use std::fmt;
use tracing::{debug, info};

/// Runs the article-to-narrative pipeline.
///
/// Holds only read-only collaborators, so one instance can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct ComicPipeline {
    pub ai_provider: Box<dyn AiProvider>,
    pub resolver: ArticleResolver,
}

impl fmt::Debug for ComicPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComicPipeline")
            .field("ai_provider", &self.ai_provider)
            .finish_non_exhaustive()
    }
}

/// A builder for creating `ComicPipeline` instances.
#[derive(Default)]
pub struct ComicPipelineBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    resolver: Option<ArticleResolver>,
}

impl ComicPipelineBuilder {
    /// Creates a new `ComicPipelineBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model used for generation.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Sets the article resolver. A default resolver is created if none is given.
    pub fn resolver(mut self, resolver: ArticleResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Builds the `ComicPipeline`.
    ///
    /// Fails with `ComicError::Configuration` when no AI provider was set.
    pub fn build(self) -> Result<ComicPipeline, ComicError> {
        let ai_provider = self.ai_provider.ok_or_else(|| {
            ComicError::Configuration("no AI provider has been configured".to_string())
        })?;
        let resolver = match self.resolver {
            Some(resolver) => resolver,
            None => ArticleResolver::new()?,
        };
        Ok(ComicPipeline {
            ai_provider,
            resolver,
        })
    }
}

impl ComicPipeline {
    /// Turns `raw_input` (article text or a URL) into a [`Narrative`].
    ///
    /// Empty input is rejected before any network call. A failed fetch stops the
    /// pipeline before the model is ever invoked.
    pub async fn run(
        &self,
        raw_input: &str,
        style: &str,
        aspect_ratio: &str,
    ) -> Result<Narrative, ComicError> {
        if raw_input.trim().is_empty() {
            return Err(ComicError::InvalidInput(
                "Article content is required.".to_string(),
            ));
        }
        if style.trim().is_empty() {
            return Err(ComicError::InvalidInput(
                "An image style is required.".to_string(),
            ));
        }
        if aspect_ratio.trim().is_empty() {
            return Err(ComicError::InvalidInput(
                "An aspect ratio is required.".to_string(),
            ));
        }

        let article = self.resolver.resolve(raw_input).await?;
        info!(
            is_url = article.is_url(),
            chars = article.text().chars().count(),
            "[run] Article resolved"
        );

        let request = GenerationRequest::new(article.text(), style, aspect_ratio);
        let prompt = compose_comic_prompt(&request);
        info!(prompt_version = PROMPT_VERSION, "[run] Meta-prompt composed");
        debug!(prompt = %prompt, "--> Sending meta-prompt to AI Provider");

        let raw_response = self.ai_provider.generate(&prompt).await?;
        debug!("<-- Raw response from AI: {}", raw_response);

        let extracted = extract_narrative(&raw_response)?;
        let narrative = assemble_narrative(&extracted, &article);
        info!(title = %narrative.article_title, "[run] Narrative assembled");

        Ok(narrative)
    }
}
