use axum::{extract::State, Json};
use submission_store::Submission;

use crate::{errors::AppResult, AppState};

/// Every stored submission in insertion order. A store that was emptied by
/// deletes still answers with `[]`; only a never-written one is a 404.
pub async fn handler(State(state): State<AppState>) -> AppResult<Json<Vec<Submission>>> {
    Ok(Json(state.store.list_all().await?))
}
