use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gleam::{ComicError, ErrorKind};
use gleam_rss::NewsError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within the server,
/// allowing them to be converted into appropriate HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Errors originating from the comic pipeline in `gleam`.
    Comic(ComicError),
    /// Errors from the news feed listing.
    News(NewsError),
}

impl From<ComicError> for AppError {
    fn from(err: ComicError) -> Self {
        AppError::Comic(err)
    }
}

impl From<NewsError> for AppError {
    fn from(err: NewsError) -> Self {
        AppError::News(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Comic(err) => {
                // Log the original error for debugging purposes
                error!(kind = %err.kind(), "ComicError: {:?}", err);
                let status = match err.kind() {
                    ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
                    ErrorKind::ArticleFetch | ErrorKind::GenerationService => {
                        StatusCode::BAD_GATEWAY
                    }
                    ErrorKind::Configuration | ErrorKind::MalformedResponse => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, err.to_string())
            }
            AppError::News(err) => {
                error!("NewsError: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch news".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
