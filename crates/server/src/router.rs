use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/styles", get(handlers::styles_handler))
        .route("/news", get(handlers::news_handler))
        .route("/generate-comic", post(handlers::generate_comic_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
