use super::handlers;
use super::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // The single page
        .route("/", get(handlers::index))
        // Transcription boundary
        .route("/upload", post(handlers::upload_audio))
        // Translation boundary
        .route("/translate", post(handlers::translate_text))
        // Health check
        .route("/health", get(handlers::health_check))
        // Raw PCM WAV uploads get big quickly; the axum default of 2 MB
        // caps recordings at a few seconds.
        .layer(DefaultBodyLimit::max(64 * 1024 * 1024))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
