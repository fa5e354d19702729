mod email;
mod index;
mod submission;

pub use email::EmailQuery;
pub use index::IndexParam;
pub use submission::SubmissionPayload;
