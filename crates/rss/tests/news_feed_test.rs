//! # News Feed Tests
//!
//! Integration tests for `fetch_news` against a `wiremock` feed server.

use anyhow::Result;
use gleam_rss::{fetch_news, NewsError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create a mock RSS feed with `count` items.
fn mock_rss_feed_content(count: usize) -> String {
    let items: String = (1..=count)
        .map(|i| {
            format!(
                "<item><title>기사 {i}</title><link>http://localhost/news/{i}</link><description>본문 {i}</description></item>"
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
    <title>Test Feed</title>
    <link>http://localhost/news</link>
    <description>A feed for testing.</description>
    {items}
</channel>
</rss>"#
    )
}

async fn serve_feed(body: String, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.xml"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("Content-Type", "application/rss+xml"),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_fetch_news_limits_items_and_reports_total() -> Result<()> {
    // --- Arrange ---
    let server = serve_feed(mock_rss_feed_content(12), 200).await;
    let client = reqwest::Client::new();

    // --- Act ---
    let feed = fetch_news(&client, &format!("{}/feed.xml", server.uri()), 10).await?;

    // --- Assert ---
    assert_eq!(feed.news.len(), 10);
    assert_eq!(feed.total, 12);
    assert_eq!(feed.news[0].title, "기사 1");
    assert_eq!(feed.news[0].link, "http://localhost/news/1");
    assert_eq!(feed.news[9].title, "기사 10");
    Ok(())
}

#[tokio::test]
async fn test_fetch_news_serializes_like_the_endpoint() -> Result<()> {
    let server = serve_feed(mock_rss_feed_content(2), 200).await;
    let client = reqwest::Client::new();

    let feed = fetch_news(&client, &format!("{}/feed.xml", server.uri()), 10).await?;
    let value = serde_json::to_value(&feed)?;

    assert_eq!(value["total"], 2);
    assert_eq!(value["news"][1]["title"], "기사 2");
    assert_eq!(value["news"][1]["link"], "http://localhost/news/2");
    Ok(())
}

#[tokio::test]
async fn test_fetch_news_error_status() {
    let server = serve_feed("Not Found".to_string(), 404).await;
    let client = reqwest::Client::new();

    let result = fetch_news(&client, &format!("{}/feed.xml", server.uri()), 10).await;

    assert!(matches!(result, Err(NewsError::Status(404))));
}

#[tokio::test]
async fn test_fetch_news_invalid_xml() {
    let server = serve_feed("this is not xml".to_string(), 200).await;
    let client = reqwest::Client::new();

    let result = fetch_news(&client, &format!("{}/feed.xml", server.uri()), 10).await;

    assert!(matches!(result, Err(NewsError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_news_skips_items_without_title_or_link() -> Result<()> {
    // --- Arrange ---
    let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
    <title>Test Feed</title>
    <link>http://localhost/news</link>
    <description>A feed for testing.</description>
    <item><title>링크 없음</title></item>
    <item><link>http://localhost/news/untitled</link></item>
    <item><title> 기사 3 </title><link> http://localhost/news/3 </link></item>
    <item><title>기사 4</title><link>http://localhost/news/4</link></item>
</channel>
</rss>"#;
    let server = serve_feed(body.to_string(), 200).await;
    let client = reqwest::Client::new();

    // --- Act ---
    let feed = fetch_news(&client, &format!("{}/feed.xml", server.uri()), 1).await?;

    // --- Assert ---
    // Incomplete items are dropped before the limit applies.
    assert_eq!(feed.total, 4);
    assert_eq!(feed.news.len(), 1);
    assert_eq!(feed.news[0].title, "기사 3");
    assert_eq!(feed.news[0].link, "http://localhost/news/3");
    Ok(())
}
