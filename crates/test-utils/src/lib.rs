//! # Shared Test Doubles
//!
//! A scripted stand-in for the generation model and canned model responses, so the
//! extractor and pipeline can be exercised without a live model.

use async_trait::async_trait;
use gleam::{errors::ComicError, providers::ai::AiProvider};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

#[derive(Clone, Debug)]
enum Scripted {
    Respond(String),
    Fail(String),
}

#[derive(Clone, Debug)]
pub struct MockAiProvider {
    responses: Arc<Mutex<HashMap<String, String>>>,
    fallback: Arc<Mutex<Option<Scripted>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            fallback: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider that answers every prompt with `response`.
    pub fn responding(response: &str) -> Self {
        let provider = Self::new();
        *provider.fallback.lock().unwrap() = Some(Scripted::Respond(response.to_string()));
        provider
    }

    /// A provider whose every call fails with a `GenerationService` error.
    pub fn failing(message: &str) -> Self {
        let provider = Self::new();
        *provider.fallback.lock().unwrap() = Some(Scripted::Fail(message.to_string()));
        provider
    }

    /// Pre-programs a response for prompts containing `key`.
    pub fn add_response(&self, key: &str, response: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(key.to_string(), response.to_string());
    }

    /// Retrieves the recorded prompts for assertion.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ComicError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let responses = self.responses.lock().unwrap();
        for (key, response) in responses.iter() {
            if prompt.contains(key) {
                return Ok(response.clone());
            }
        }

        match self.fallback.lock().unwrap().clone() {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(ComicError::GenerationService(message)),
            None => Err(ComicError::GenerationService(
                "MockAiProvider: No response programmed for prompt.".to_string(),
            )),
        }
    }
}

// --- Canned Model Responses ---

/// A model response in the requested shape with `panel_count` panels.
///
/// Panel `i` carries `i` in every one of its fields so tests can check that
/// reshaping keeps panels aligned.
pub fn narrative_value(title: &str, panel_count: usize) -> Value {
    let panels: Vec<Value> = (0..panel_count)
        .map(|i| {
            json!({
                "summary": format!("요약 {i}"),
                "prompt": format!("prompt {i} --ar 1:1"),
                "simple_prompt": format!("simple {i} --ar 1:1"),
                "captions": {
                    "expository": format!("설명 {i}"),
                    "interrogative": format!("질문 {i}?"),
                    "summary": format!("사실 {i}")
                }
            })
        })
        .collect();

    json!({
        "title": title,
        "main_prompt": "A city celebrates a new bridge --ar 1:1",
        "simple_main_prompt": "new bridge, city --ar 1:1",
        "panels": panels,
        "tags": ["교량", "개통", "교통", "도시", "인프라"]
    })
}

/// `narrative_value` serialized compactly, as a model would emit it.
pub fn narrative_json(title: &str, panel_count: usize) -> String {
    narrative_value(title, panel_count).to_string()
}
