use axum::{extract::State, Json};
use submission_store::Submission;

use crate::{
    errors::{AppError, AppResult, NO_EMAIL_MATCHES},
    extractors::EmailQuery,
    AppState,
};

pub async fn handler(
    State(state): State<AppState>,
    EmailQuery(email): EmailQuery,
) -> AppResult<Json<Vec<Submission>>> {
    match email {
        Some(email) => Ok(Json(state.store.find_by_email(&email).await?)),
        // Nothing can match, but a missing store still wins.
        None => {
            state.store.list_all().await?;
            Err(AppError::not_found(NO_EMAIL_MATCHES))
        }
    }
}
