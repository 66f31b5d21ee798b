//! # API Payloads
//!
//! Request and response bodies for the comic endpoint.

use gleam::{
    constants::{DEFAULT_ASPECT_RATIO, DEFAULT_IMAGE_STYLE},
    Narrative,
};
use serde::{Deserialize, Serialize};

/// The body of `POST /generate-comic`.
///
/// `article` defaults to empty so a missing field reaches the pipeline's own
/// validation and is reported as invalid input.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateComicRequest {
    #[serde(default)]
    pub article: String,
    #[serde(default = "default_style", alias = "selectedStyle")]
    pub style: String,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
}

fn default_style() -> String {
    DEFAULT_IMAGE_STYLE.to_string()
}

fn default_aspect_ratio() -> String {
    DEFAULT_ASPECT_RATIO.to_string()
}

/// The success body: the narrative fields plus the reserved image list.
#[derive(Serialize, Debug)]
pub struct ComicResponse {
    #[serde(flatten)]
    pub narrative: Narrative,
    pub images: Vec<String>,
}
