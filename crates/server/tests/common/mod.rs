//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `gleam-server`
//! integration tests.
//!
//! - `TestApp`: spawns a real server on a random port. Its configuration points the
//!   Gemini provider and the news feed at an `httpmock::MockServer`.
//! - Helpers for building mock Gemini and RSS payloads.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use gleam_server::{
    config::{self, AppConfig, ProviderConfig},
    router,
    state::{build_app_state, AppState},
};
use httpmock::MockServer;
use reqwest::Client;
use serde_json::{json, Value};
use std::{fs::File, io::Write, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

/// The generation path the mock Gemini endpoint listens on.
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-test:generateContent";
/// The API key written into the test configuration.
pub const TEST_API_KEY: &str = "test-key";
/// The path the mock RSS feed is served from.
pub const FEED_PATH: &str = "/feed";

// --- Full Application Test Harness ---

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    pub app_state: AppState,
    _config_dir: Option<TempDir>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server from a `config.yml` that points every upstream at the mock server.
    pub async fn spawn() -> Result<Self> {
        let mock_server = MockServer::start();

        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
news_feed_url: "{}"
news_limit: 3
provider:
  provider: "gemini"
  api_url: "{}"
  api_key: "{TEST_API_KEY}"
  model_name: "gemini-test"
"#,
            mock_server.url(FEED_PATH),
            mock_server.url(GEMINI_PATH),
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config = config::get_config(Some(config_path.to_str().unwrap()))?;
        let app_state = build_app_state(config).await?;

        let mut app = TestApp::spawn_with_state(app_state, mock_server).await?;
        app._config_dir = Some(config_dir);
        Ok(app)
    }

    /// Spawns the server with a Gemini provider that has no API key.
    pub async fn spawn_without_api_key() -> Result<Self> {
        let mock_server = MockServer::start();
        let config = AppConfig {
            port: 0,
            news_feed_url: mock_server.url(FEED_PATH),
            news_limit: 3,
            provider: ProviderConfig {
                provider: "gemini".to_string(),
                api_url: Some(mock_server.url(GEMINI_PATH)),
                api_key: None,
                model_name: "gemini-test".to_string(),
            },
        };
        let app_state = build_app_state(config).await?;
        TestApp::spawn_with_state(app_state, mock_server).await
    }

    pub async fn spawn_with_state(app_state: AppState, mock_server: MockServer) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let app_state_for_harness = app_state.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            app_state: app_state_for_harness,
            _config_dir: None,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Posts a JSON body to `/generate-comic`.
    pub async fn generate_comic(&self, body: &Value) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(format!("{}/generate-comic", self.address))
            .json(body)
            .send()
            .await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

// --- Payload Builders ---

/// Wraps model text in the Gemini `generateContent` response envelope.
pub fn gemini_response(text: &str) -> Value {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
}

/// Builds an RSS 2.0 document with `count` items.
pub fn rss_feed(count: usize) -> String {
    let items: String = (1..=count)
        .map(|i| {
            format!(
                "<item><title>헤드라인 {i}</title><link>https://news.example.com/{i}</link></item>"
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>뉴스</title><link>https://news.example.com</link><description>최신 뉴스</description>{items}</channel></rss>"#
    )
}
