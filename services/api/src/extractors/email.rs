use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use crate::errors::AppError;

/// `email` query parameter. Absent, repeated or unparseable values all come
/// through as `None`, since no stored record can match them.
pub struct EmailQuery(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for EmailQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Unparseable search query");
                return Ok(EmailQuery(None));
            }
        };

        let mut emails = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value);

        let email = match (emails.next(), emails.next()) {
            (Some(email), None) => Some(email),
            _ => None,
        };

        Ok(EmailQuery(email))
    }
}
