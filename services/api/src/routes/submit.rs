use axum::{extract::State, Json};
use tracing::info;

use super::MessageResponse;
use crate::{errors::AppResult, extractors::SubmissionPayload, AppState};

pub async fn handler(
    State(state): State<AppState>,
    SubmissionPayload(submission): SubmissionPayload,
) -> AppResult<Json<MessageResponse>> {
    let email = submission.email.clone();
    let count = state.store.append(submission).await?;
    info!(%email, count, "Stored submission");

    Ok(Json(MessageResponse {
        message: "Submission successful.",
    }))
}
