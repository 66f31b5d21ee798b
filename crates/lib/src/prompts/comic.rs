//! # Comic Generation Prompt
//!
//! The meta-prompt that turns a news article into a four-panel comic script.
//!
//! The output example embedded in the prompt is rendered from
//! [`ExtractedNarrative::schema_example`], the same type the extractor
//! deserializes into. Changing a field name on that type changes both sides at once.

use crate::types::{ExtractedNarrative, GenerationRequest, PANEL_COUNT};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Identifies the (prompt, extractor) pair. Bump when the requested JSON shape changes.
pub const PROMPT_VERSION: &str = "comic-v3";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-z_]+)\}").unwrap_or_else(|e| panic!("invalid placeholder pattern: {e}"))
});

/// The meta-prompt template.
///
/// Placeholders: `{panel_count}`, `{style}`, `{aspect_ratio}`, `{schema_example}`, `{article}`
pub const COMIC_GENERATION_PROMPT: &str = r#"You are an AI assistant for an app called "Gleam News". Your task is to create a scenario and prompts for a {panel_count}-cut comic based on the provided news article.
Ensure all generated content (summary, captions, and prompts) strictly adheres to safety policies, avoiding any harmful, hateful, or inappropriate content.
Avoid using specific personal names or exact geographical locations in the summary, captions, and prompts. Instead, use general terms like 'a person,' 'the city,' 'the region,' or 'the individual' where appropriate.

Here is the news article:
---
{article}
---

Perform the following tasks:
0.  **Generate Article Title**: Create a concise, single-line, catchy title for the {panel_count}-cut comic based on the provided news article. This MUST be in Korean. Do NOT use English for the article title.
1.  **Generate Main Prompts**: Create a 'main_prompt' and a 'simple_main_prompt'. These should summarize the entire {panel_count}-cut story in a way that is suitable for generating a single, representative image for the whole article. The prompts should be in English, be visually rich, be in the {style} style, and end with "--ar {aspect_ratio}".
2.  **Summarize**: Create a {panel_count}-point summary of the article. Each point will be a title for a comic panel and must be concise, under 15 Korean characters.
3.  **Generate Prompts**: For each of the {panel_count} summary points, create a detailed and visually rich prompt for an image generation AI. The image should be in the {style} style. Based on the news article's primary geographical or cultural context, describe human characters as either 'East Asian' or 'Western' (Caucasian). The prompts should be in English. Each prompt must end with "--ar {aspect_ratio}".
4.  **Generate Simple Prompts**: For each prompt generated in the previous step, create a simplified version that only contains the most essential keywords. The image should be in the {style} style. This prompt should also be in English and end with "--ar {aspect_ratio}".
5.  **Generate Captions**: For each of the {panel_count} summary points, create three captions in Korean:
    -   **Expository Caption** ("expository"): A detailed caption describing the scene or event. It should be around 50 Korean characters.
    -   **Interrogative Caption** ("interrogative"): A caption that asks a question related to the scene or event, sparking curiosity. It should also be around 50 Korean characters.
    -   **Summary Caption** ("summary"): 만화 패널에 묘사된 핵심적인 행동이나 사건을 간결하게 요약하는 사실적인 한국어 캡션입니다. 패널의 제목과는 구별되어야 하며, 약 25자 내외로 작성합니다.
6.  **Generate Tags**: Create a list of 5 to 7 concise Korean keywords related to the article's main topics.

Your final output must be a single JSON object. Do not include any text, markdown code fences, or commentary outside of the JSON object.
The "panels" array must contain exactly {panel_count} entries, in story order.
The JSON object must have the following structure:
{schema_example}
"#;

/// Builds the meta-prompt for one request.
///
/// Pure and deterministic: identical requests produce identical prompts.
/// Placeholders are filled in a single pass, so braces inside the article, style or
/// aspect ratio are copied verbatim and never expanded.
pub fn compose_comic_prompt(request: &GenerationRequest) -> String {
    // serde_json cannot fail on a struct of strings and vectors.
    let schema_example =
        serde_json::to_string_pretty(&ExtractedNarrative::schema_example()).unwrap_or_default();
    let panel_count = PANEL_COUNT.to_string();

    PLACEHOLDER
        .replace_all(COMIC_GENERATION_PROMPT, |caps: &Captures| {
            match &caps[1] {
                "panel_count" => panel_count.as_str(),
                "style" => request.style.trim(),
                "aspect_ratio" => request.aspect_ratio.trim(),
                "schema_example" => schema_example.as_str(),
                "article" => request.article_text.trim(),
                // Not a placeholder; keep the text as written.
                _ => caps.get(0).map_or("", |m| m.as_str()),
            }
            .to_string()
        })
        .into_owned()
}
