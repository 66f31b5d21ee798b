//! # News Endpoint Tests

mod common;

use anyhow::Result;
use common::{rss_feed, TestApp, FEED_PATH};
use httpmock::Method::GET;
use serde_json::{json, Value};

#[tokio::test]
async fn test_news_endpoint_lists_limited_headlines() -> Result<()> {
    // --- 1. Arrange ---
    let app = TestApp::spawn().await?;
    let feed_mock = app.mock_server.mock(|when, then| {
        when.method(GET).path(FEED_PATH);
        then.status(200)
            .header("content-type", "application/rss+xml")
            .body(rss_feed(5));
    });

    // --- 2. Act ---
    let response = app
        .client
        .get(format!("{}/news", app.address))
        .send()
        .await?;

    // --- 3. Assert ---
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    feed_mock.assert();
    // The harness configures a limit of 3.
    assert_eq!(body["news"].as_array().unwrap().len(), 3);
    assert_eq!(body["total"], 5);
    assert_eq!(
        body["news"][0],
        json!({ "title": "헤드라인 1", "link": "https://news.example.com/1" })
    );

    Ok(())
}

#[tokio::test]
async fn test_news_endpoint_failure_is_generic_error() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(GET).path(FEED_PATH);
        then.status(503);
    });

    let response = app
        .client
        .get(format!("{}/news", app.address))
        .send()
        .await?;

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await?;
    assert_eq!(body, json!({ "error": "Failed to fetch news" }));

    Ok(())
}

#[tokio::test]
async fn test_news_endpoint_rejects_invalid_feed() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_server.mock(|when, then| {
        when.method(GET).path(FEED_PATH);
        then.status(200).body("<html>not a feed</html>");
    });

    let response = app
        .client
        .get(format!("{}/news", app.address))
        .send()
        .await?;

    assert_eq!(response.status(), 500);

    Ok(())
}
