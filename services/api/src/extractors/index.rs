use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::{AppError, INVALID_INDEX};

/// `:index` path segment parsed as a signed integer. Range checks belong to
/// the store, so negative values pass through.
pub struct IndexParam(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IndexParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(INVALID_INDEX))?;

        raw.trim()
            .parse()
            .map(IndexParam)
            .map_err(|_| AppError::bad_request(INVALID_INDEX))
    }
}
