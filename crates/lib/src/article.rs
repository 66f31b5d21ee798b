//! # Article Resolution
//!
//! Decides whether the caller handed us a URL or the article itself, and for URLs
//! retrieves the document body. The body is used verbatim: no content-type
//! sniffing or HTML extraction happens here.

use crate::{errors::ComicError, types::ArticleInput};
use reqwest::Client as ReqwestClient;
use tracing::{info, warn};
use url::Url;

/// Returns the parsed URL if `input` is a well-formed absolute URL with an authority.
///
/// Anything else, including strings like `"속보: ..."` that happen to parse with a
/// scheme but no host, is treated as raw article text.
pub fn classify(input: &str) -> Option<Url> {
    let trimmed = input.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return None;
    }
    Url::parse(trimmed)
        .ok()
        .filter(|url| url.has_host() && !url.cannot_be_a_base())
}

/// Resolves raw caller input into an [`ArticleInput`].
#[derive(Clone, Debug)]
pub struct ArticleResolver {
    client: ReqwestClient,
}

impl ArticleResolver {
    /// Creates a resolver with its own HTTP client.
    pub fn new() -> Result<Self, ComicError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(ComicError::ReqwestClientBuild)?;
        Ok(Self { client })
    }

    /// Creates a resolver that shares an existing HTTP client.
    pub fn with_client(client: ReqwestClient) -> Self {
        Self { client }
    }

    /// Classifies `input` and, for URLs, issues exactly one GET request.
    ///
    /// Raw text never touches the network. A transport failure or a non-2xx status
    /// fails with `ComicError::ArticleFetch`; there is no retry.
    pub async fn resolve(&self, input: &str) -> Result<ArticleInput, ComicError> {
        let Some(url) = classify(input) else {
            return Ok(ArticleInput::Raw {
                text: input.to_string(),
            });
        };

        let original = input.trim().to_string();
        info!("Fetching article from: {original}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ComicError::ArticleFetch {
                url: original.clone(),
                status: None,
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url = %original, "Article fetch returned a non-success status");
            return Err(ComicError::ArticleFetch {
                url: original,
                status: Some(status.as_u16()),
                detail: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let fetched_text = response
            .text()
            .await
            .map_err(|e| ComicError::ArticleFetch {
                url: original.clone(),
                status: Some(status.as_u16()),
                detail: e.to_string(),
            })?;
        info!(bytes = fetched_text.len(), "Fetched article body");

        Ok(ArticleInput::Remote {
            url: original,
            fetched_text,
        })
    }
}
