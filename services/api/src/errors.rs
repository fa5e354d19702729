use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use submission_store::StoreError;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const INVALID_JSON_BODY: &str = "Invalid JSON body.";
pub const INVALID_INDEX: &str = "Invalid index.";
pub const NO_SUBMISSIONS: &str = "No submissions found.";
pub const NO_EMAIL_MATCHES: &str = "No submissions found with the given email.";
pub const INTERNAL_ERROR: &str = "An internal server error occurred.";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingField(_) => AppError::bad_request(ALL_FIELDS_REQUIRED),
            StoreError::InvalidIndex { .. } => AppError::bad_request(INVALID_INDEX),
            StoreError::NoSubmissions => AppError::not_found(NO_SUBMISSIONS),
            StoreError::NoMatches(_) => AppError::not_found(NO_EMAIL_MATCHES),
            StoreError::Io(_) | StoreError::Serialization(_) => {
                tracing::error!(error = %err, "Submission storage failure");
                AppError::internal_server_error()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
