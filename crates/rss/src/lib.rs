//! # `gleam-rss`: News Feed Retrieval
//!
//! Fetches an RSS feed of news headlines so callers can pick an article to turn
//! into a comic. Only titles and links are kept; the article itself is fetched
//! later, by URL, through the pipeline.

use rss::Channel;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// The feed used when none is configured.
pub const DEFAULT_FEED_URL: &str = "http://www.yonhapnewstv.co.kr/browse/feed/";

/// How many items are returned when no limit is configured.
pub const DEFAULT_NEWS_LIMIT: usize = 10;

/// Custom error types for news feed retrieval.
#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Failed to fetch RSS feed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Failed to fetch RSS feed: status {0}")]
    Status(u16),
    #[error("Failed to parse RSS feed: {0}")]
    Parse(#[from] rss::Error),
}

/// A single headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
}

/// The first few headlines of a feed, plus how many the feed held in total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsFeed {
    pub news: Vec<NewsItem>,
    pub total: usize,
}

/// Fetches `feed_url` and returns up to `limit` items that have both a title and a link.
///
/// `total` counts every item in the channel, including ones that were skipped.
pub async fn fetch_news(
    client: &reqwest::Client,
    feed_url: &str,
    limit: usize,
) -> Result<NewsFeed, NewsError> {
    info!("Fetching RSS feed from: {}", feed_url);
    let response = client.get(feed_url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(NewsError::Status(status.as_u16()));
    }

    let content = response.bytes().await?;
    let channel = Channel::read_from(&content[..])?;

    let items = channel.items();
    let news: Vec<NewsItem> = items
        .iter()
        .filter_map(|item| match (item.title(), item.link()) {
            (Some(title), Some(link)) => Some(NewsItem {
                title: title.trim().to_string(),
                link: link.trim().to_string(),
            }),
            _ => None,
        })
        .take(limit)
        .collect();

    info!(
        "Parsed {} of {} items from RSS feed.",
        news.len(),
        items.len()
    );

    Ok(NewsFeed {
        news,
        total: items.len(),
    })
}
