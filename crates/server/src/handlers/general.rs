//! # General Route Handlers
//!
//! Root, health check and the style catalogue.

use axum::Json;
use gleam::constants::{ASPECT_RATIOS, IMAGE_STYLES};
use serde_json::{json, Value};

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "gleam server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Lists the image styles and aspect ratios a client can offer.
pub async fn styles_handler() -> Json<Value> {
    Json(json!({
        "styles": IMAGE_STYLES,
        "aspectRatios": ASPECT_RATIOS,
    }))
}
