use axum::{extract::State, Json};
use tracing::info;

use super::MessageResponse;
use crate::{errors::AppResult, extractors::IndexParam, AppState};

pub async fn handler(
    State(state): State<AppState>,
    IndexParam(index): IndexParam,
) -> AppResult<Json<MessageResponse>> {
    let removed = state.store.delete_at(index).await?;
    info!(index, email = %removed.email, "Deleted submission");

    Ok(Json(MessageResponse {
        message: "Submission deleted successfully.",
    }))
}
