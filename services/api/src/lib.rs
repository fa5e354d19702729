use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use submission_store::SubmissionStore;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod errors;
mod extractors;
mod routes;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SubmissionStore>,
}

impl AppState {
    pub fn new(db_file: impl Into<PathBuf>) -> Self {
        Self {
            store: Arc::new(SubmissionStore::new(db_file)),
        }
    }
}

/// Full application: submission routes plus tracing and CORS layers.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
