pub mod models;
mod store;

pub use models::Submission;
pub use store::SubmissionStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Index {index} out of range for {len} submissions")]
    InvalidIndex { index: i64, len: usize },

    #[error("No submissions have been persisted")]
    NoSubmissions,

    #[error("No submissions match email {0:?}")]
    NoMatches(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
