//! # Gleam: News Articles to Four-Panel Comics
//!
//! This crate turns a news article (raw text or a URL) into a structured
//! four-panel narrative: a title, per-panel summaries, captions in three tones,
//! image-generation prompts and topical tags. Content understanding is delegated to
//! a text-generation model through the [`AiProvider`](providers::ai::AiProvider)
//! trait; this crate owns the prompt contract and the strict-then-lenient decoding
//! of whatever the model sends back.

pub mod article;
pub mod assemble;
pub mod constants;
pub mod errors;
pub mod export;
pub mod extract;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod types;

pub use article::{classify, ArticleResolver};
pub use assemble::assemble_narrative;
pub use errors::{ComicError, ErrorKind};
pub use extract::extract_narrative;
pub use pipeline::{ComicPipeline, ComicPipelineBuilder};
pub use prompts::compose_comic_prompt;
pub use types::{
    ArticleInput, ExtractedNarrative, GenerationRequest, Narrative, Panel, PanelCaptions,
    PANEL_COUNT,
};
