//! # Narrative Export
//!
//! Renders a [`Narrative`] as the plain-text document users download, with the
//! source attributed either by URL or by quoting the original article.

use crate::types::Narrative;
use std::fmt::Write;

/// Renders the downloadable text export.
pub fn render_markdown(narrative: &Narrative) -> String {
    let mut content = String::new();

    // `write!` into a `String` cannot fail.
    if narrative.is_url {
        let _ = write!(
            content,
            "## 기사 출처 URL: {}\n\n",
            narrative.original_article_input
        );
    } else {
        let _ = write!(
            content,
            "## 원본 기사 내용:\n{}\n\n",
            narrative.original_article_input
        );
    }
    let _ = write!(content, "## 기사 제목: {}\n\n", narrative.article_title);
    if !narrative.tags.is_empty() {
        let _ = write!(content, "### 태그: {}\n\n", narrative.tags.join(", "));
    }
    content.push_str("---\n\n");

    let _ = writeln!(
        content,
        "### 메인 이미지 프롬프트: {}",
        narrative.main_image_prompt
    );
    let _ = write!(
        content,
        "### 간결한 메인 이미지 프롬프트: {}\n\n",
        narrative.simple_main_image_prompt
    );
    content.push_str("---\n\n");

    for (index, panel_title) in narrative.summary.iter().enumerate() {
        let captions = narrative.captions.get(index);
        let prompt = narrative.prompts.get(index).map_or("", String::as_str);
        let simple_prompt = narrative.simple_prompts.get(index).map_or("", String::as_str);

        let _ = writeln!(content, "### 컷{} (제목: {panel_title})", index + 1);
        if let Some(captions) = captions {
            let _ = writeln!(content, "- 설명: {}", captions.expository);
            let _ = writeln!(content, "- 질문: {}", captions.interrogative);
            let _ = writeln!(content, "- 요약: {}", captions.summary);
        }
        let _ = writeln!(content, "- 프롬프트: {prompt}");
        if !simple_prompt.is_empty() {
            let _ = writeln!(content, "- 간결한 프롬프트: {simple_prompt}");
        }
        content.push('\n');
    }

    content
}

/// A filesystem-safe export name derived from the title.
///
/// Every character outside ASCII letters, digits and precomposed Hangul
/// syllables becomes `_`.
pub fn export_file_name(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || ('가'..='힣').contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}.txt")
}
