use axum::Json;

/// Liveness probe; never touches the store.
pub async fn handler() -> Json<bool> {
    Json(true)
}
