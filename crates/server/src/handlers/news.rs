//! # News Listing Handler

use super::{AppError, AppState};
use axum::{extract::State, Json};
use gleam_rss::{fetch_news, NewsFeed};

/// Lists the latest headlines from the configured RSS feed.
pub async fn news_handler(State(app_state): State<AppState>) -> Result<Json<NewsFeed>, AppError> {
    let feed = fetch_news(
        &app_state.http_client,
        &app_state.config.news_feed_url,
        app_state.config.news_limit,
    )
    .await?;
    Ok(Json(feed))
}
