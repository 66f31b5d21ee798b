//! # Narrative Assembly
//!
//! Reshapes the model's nested per-panel objects into the flat, parallel
//! sequences of the public [`Narrative`] schema. Consumers only ever see these
//! names, so a future prompt version can restructure its JSON without touching them.

use crate::types::{ArticleInput, ExtractedNarrative, Narrative};

/// Projects a validated extraction into the public schema.
///
/// Total over validated input; panel order is preserved across every sequence.
pub fn assemble_narrative(extracted: &ExtractedNarrative, article: &ArticleInput) -> Narrative {
    let panels = &extracted.panels;

    Narrative {
        article_title: extracted.title.trim().to_string(),
        main_image_prompt: extracted.main_prompt.clone(),
        simple_main_image_prompt: extracted.simple_main_prompt.clone(),
        summary: panels.iter().map(|p| p.summary.clone()).collect(),
        captions: panels.iter().map(|p| p.captions.clone()).collect(),
        prompts: panels.iter().map(|p| p.prompt.clone()).collect(),
        simple_prompts: panels.iter().map(|p| p.simple_prompt.clone()).collect(),
        tags: extracted.tags.clone(),
        original_article_input: article.original_input().to_string(),
        is_url: article.is_url(),
    }
}
