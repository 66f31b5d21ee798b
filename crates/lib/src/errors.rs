use std::fmt;
use thiserror::Error;

/// The broad category of a pipeline failure.
///
/// The HTTP boundary picks a status code from this, and callers that only care
/// about "whose fault was it" can match on it without destructuring every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    InvalidInput,
    ArticleFetch,
    GenerationService,
    MalformedResponse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::ArticleFetch => "article_fetch",
            ErrorKind::GenerationService => "generation_service",
            ErrorKind::MalformedResponse => "malformed_response",
        };
        f.write_str(name)
    }
}

/// Custom error types for the comic pipeline.
#[derive(Error, Debug)]
pub enum ComicError {
    #[error("Server is not configured correctly: {0}")]
    Configuration(String),
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(#[source] reqwest::Error),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Failed to fetch article from '{url}': {}", fetch_detail(.status, .detail))]
    ArticleFetch {
        url: String,
        status: Option<u16>,
        detail: String,
    },
    #[error("{0}")]
    GenerationService(String),
    #[error("AI 응답에서 유효한 JSON을 찾을 수 없습니다: {reason}")]
    MalformedResponse {
        reason: String,
        /// The model's literal output.
        raw: String,
        /// The brace-delimited substring, if the extraction fallback got that far.
        extracted: Option<String>,
    },
}

fn fetch_detail(status: &Option<u16>, detail: &str) -> String {
    match status {
        Some(code) => format!("status {code}: {detail}"),
        None => detail.to_string(),
    }
}

impl ComicError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ComicError::Configuration(_) | ComicError::ReqwestClientBuild(_) => {
                ErrorKind::Configuration
            }
            ComicError::InvalidInput(_) => ErrorKind::InvalidInput,
            ComicError::ArticleFetch { .. } => ErrorKind::ArticleFetch,
            ComicError::GenerationService(_) => ErrorKind::GenerationService,
            ComicError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
        }
    }

    pub(crate) fn malformed(
        reason: impl Into<String>,
        raw: &str,
        extracted: Option<&str>,
    ) -> Self {
        ComicError::MalformedResponse {
            reason: reason.into(),
            raw: raw.to_string(),
            extracted: extracted.map(str::to_string),
        }
    }
}
