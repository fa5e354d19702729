use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;

use crate::AppState;

mod edit;
mod ping;
mod read_all;
mod remove;
mod search;
mod submit;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping::handler))
        .route("/submit", post(submit::handler))
        .route("/read_all", get(read_all::handler))
        .route("/delete/:index", delete(remove::handler))
        .route("/edit/:index", put(edit::handler))
        .route("/search", get(search::handler))
}
