//! # Result Extraction
//!
//! Turns a model's raw text into a validated [`ExtractedNarrative`].
//!
//! The model is told to emit a bare JSON object, and usually does. When it does
//! not (a "Here you go:" preamble, code fences, a closing remark) the object is
//! recovered from between the first `{` and the last `}`. Either way the result
//! passes through the same shape validation before anyone sees it: parsing is
//! never taken as proof that the shape is right.
//!
//! The fallback is greedy and not nesting-aware. Two sibling top-level objects in
//! the model's prose would be glued together and fail to parse; the output contract
//! asks for exactly one object, so that case is reported as malformed rather than
//! guessed at.

use crate::{
    errors::ComicError,
    types::{ExtractedNarrative, PANEL_COUNT},
};
use serde_json::Value;
use tracing::{debug, warn};

const MIN_TAGS: usize = 5;
const MAX_TAGS: usize = 7;

/// Parses and validates a raw model response.
///
/// 1. Direct parse of the whole (trimmed) text.
/// 2. If that fails, parse the substring from the first `{` to the last `}`, inclusive.
/// 3. Validate the candidate's shape.
///
/// Every failure is a `ComicError::MalformedResponse` carrying the raw text and,
/// when step 2 was reached, the extracted substring.
pub fn extract_narrative(raw: &str) -> Result<ExtractedNarrative, ComicError> {
    if let Ok(value) = serde_json::from_str::<Value>(raw.trim()) {
        debug!("Model response parsed directly as JSON");
        return validate(value, raw, None);
    }

    let Some(candidate) = brace_span(raw) else {
        return Err(ComicError::malformed(
            "no JSON object found in the model response",
            raw,
            None,
        ));
    };

    warn!(
        raw_len = raw.len(),
        candidate_len = candidate.len(),
        "Model response was not bare JSON; using the extraction fallback"
    );

    let value = serde_json::from_str::<Value>(candidate).map_err(|e| {
        ComicError::malformed(
            format!("extracted text is not valid JSON: {e}"),
            raw,
            Some(candidate),
        )
    })?;

    validate(value, raw, Some(candidate))
}

/// The slice from the first `{` to the last `}`, inclusive.
fn brace_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

fn validate(
    value: Value,
    raw: &str,
    extracted: Option<&str>,
) -> Result<ExtractedNarrative, ComicError> {
    if !value.is_object() {
        return Err(ComicError::malformed(
            "top-level JSON value is not an object",
            raw,
            extracted,
        ));
    }

    let narrative: ExtractedNarrative = serde_json::from_value(value).map_err(|e| {
        ComicError::malformed(format!("response has the wrong shape: {e}"), raw, extracted)
    })?;

    if narrative.panels.len() != PANEL_COUNT {
        return Err(ComicError::malformed(
            format!(
                "expected exactly {PANEL_COUNT} panels, found {}",
                narrative.panels.len()
            ),
            raw,
            extracted,
        ));
    }

    let title = narrative.title.trim();
    if title.is_empty() {
        return Err(ComicError::malformed("title is empty", raw, extracted));
    }
    if title.contains(['\n', '\r']) {
        return Err(ComicError::malformed(
            "title spans more than one line",
            raw,
            extracted,
        ));
    }

    if !(MIN_TAGS..=MAX_TAGS).contains(&narrative.tags.len()) {
        warn!(
            tags = narrative.tags.len(),
            "Tag count is outside the requested {MIN_TAGS}-{MAX_TAGS} range"
        );
    }

    Ok(narrative)
}
