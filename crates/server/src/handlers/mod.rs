//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `gleam-server`.
//! The handlers are split into sub-modules by functionality.

pub mod comic;
pub mod general;
pub mod news;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use comic::*;
pub use general::*;
pub use news::*;

// Shared items used by multiple handler modules.
use super::{errors::AppError, state::AppState};
