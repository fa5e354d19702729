use axum::{extract::State, Json};
use tracing::info;

use super::MessageResponse;
use crate::{
    errors::AppResult,
    extractors::{IndexParam, SubmissionPayload},
    AppState,
};

/// Full replace of the submission at `index`; partial bodies are rejected.
pub async fn handler(
    State(state): State<AppState>,
    IndexParam(index): IndexParam,
    SubmissionPayload(submission): SubmissionPayload,
) -> AppResult<Json<MessageResponse>> {
    state.store.replace_at(index, submission).await?;
    info!(index, "Updated submission");

    Ok(Json(MessageResponse {
        message: "Submission updated successfully.",
    }))
}
