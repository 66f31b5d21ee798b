//! # Pipeline Data Model
//!
//! The values that flow between the pipeline stages. `ExtractedNarrative` mirrors
//! the JSON shape the model is told to emit; `Narrative` is the stable, caller-facing
//! schema that the HTTP boundary and exports consume.

use serde::{Deserialize, Serialize};

/// The number of panels in every comic.
pub const PANEL_COUNT: usize = 4;

/// A resolved article, either typed in directly or retrieved from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleInput {
    Raw { text: String },
    Remote { url: String, fetched_text: String },
}

impl ArticleInput {
    /// The text handed to the prompt composer.
    pub fn text(&self) -> &str {
        match self {
            ArticleInput::Raw { text } => text,
            ArticleInput::Remote { fetched_text, .. } => fetched_text,
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, ArticleInput::Remote { .. })
    }

    /// What the caller originally typed: the URL for remote articles, the text otherwise.
    pub fn original_input(&self) -> &str {
        match self {
            ArticleInput::Raw { text } => text,
            ArticleInput::Remote { url, .. } => url,
        }
    }
}

/// The immutable inputs to prompt composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub article_text: String,
    pub style: String,
    pub aspect_ratio: String,
}

impl GenerationRequest {
    pub fn new(
        article_text: impl Into<String>,
        style: impl Into<String>,
        aspect_ratio: impl Into<String>,
    ) -> Self {
        Self {
            article_text: article_text.into(),
            style: style.into(),
            aspect_ratio: aspect_ratio.into(),
        }
    }
}

/// The three caption tones written for each panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelCaptions {
    pub expository: String,
    pub interrogative: String,
    pub summary: String,
}

/// One panel exactly as the model describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub summary: String,
    pub prompt: String,
    pub simple_prompt: String,
    pub captions: PanelCaptions,
}

/// The validated object recovered from a model response.
///
/// Field names here ARE the wire contract with the model: the meta-prompt embeds a
/// serialized `schema_example()`, and the extractor deserializes into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedNarrative {
    pub title: String,
    pub main_prompt: String,
    pub simple_main_prompt: String,
    pub panels: Vec<Panel>,
    pub tags: Vec<String>,
}

impl ExtractedNarrative {
    /// A placeholder instance used as the literal output example in the meta-prompt.
    pub fn schema_example() -> Self {
        let panel = Panel {
            summary: "...".to_string(),
            prompt: "...".to_string(),
            simple_prompt: "...".to_string(),
            captions: PanelCaptions {
                expository: "...".to_string(),
                interrogative: "...".to_string(),
                summary: "...".to_string(),
            },
        };
        Self {
            title: "...".to_string(),
            main_prompt: "...".to_string(),
            simple_main_prompt: "...".to_string(),
            panels: vec![panel; PANEL_COUNT],
            tags: vec!["...".to_string(); 3],
        }
    }
}

/// The caller-facing result of the pipeline.
///
/// All per-panel sequences are parallel: index `i` of `summary`, `captions`,
/// `prompts` and `simple_prompts` describes the same panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub article_title: String,
    pub main_image_prompt: String,
    pub simple_main_image_prompt: String,
    pub summary: Vec<String>,
    pub captions: Vec<PanelCaptions>,
    pub prompts: Vec<String>,
    pub simple_prompts: Vec<String>,
    pub tags: Vec<String>,
    pub original_article_input: String,
    pub is_url: bool,
}
