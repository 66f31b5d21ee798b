//! # Prompt Template Modules
//!
//! This module organizes the prompt templates used by the pipeline.

pub mod comic;

pub use comic::{compose_comic_prompt, COMIC_GENERATION_PROMPT, PROMPT_VERSION};
