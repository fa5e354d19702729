use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::Deserialize;
use submission_store::Submission;

use crate::errors::{AppError, ALL_FIELDS_REQUIRED, INVALID_JSON_BODY};

/// Request body as sent; every field may be absent.
#[derive(Debug, Default, Deserialize)]
struct RawSubmission {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    github_link: Option<String>,
    stopwatch_time: Option<String>,
}

impl RawSubmission {
    fn into_submission(self) -> Option<Submission> {
        let submission = Submission {
            name: self.name?,
            email: self.email?,
            phone: self.phone?,
            github_link: self.github_link?,
            stopwatch_time: self.stopwatch_time?,
        };

        submission.missing_field().is_none().then_some(submission)
    }
}

/// JSON body carrying all five submission fields, each non-empty.
pub struct SubmissionPayload(pub Submission);

#[async_trait]
impl<S> FromRequest<S> for SubmissionPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<RawSubmission>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected submission body");
                AppError::bad_request(INVALID_JSON_BODY)
            })?;

        raw.into_submission()
            .map(SubmissionPayload)
            .ok_or_else(|| AppError::bad_request(ALL_FIELDS_REQUIRED))
    }
}
