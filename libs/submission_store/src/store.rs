use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{StoreError, StoreResult, Submission};

/// Submission collection persisted as a single pretty-printed JSON array.
///
/// Every call re-reads the file; mutations rewrite the whole file. The
/// internal lock serialises load-modify-persist sequences within this
/// process only.
pub struct SubmissionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SubmissionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a collection has ever been persisted.
    pub async fn exists(&self) -> StoreResult<bool> {
        Ok(fs::try_exists(&self.path).await?)
    }

    /// Append a submission, creating the collection if needed.
    /// Returns the collection length after the append.
    pub async fn append(&self, submission: Submission) -> StoreResult<usize> {
        ensure_complete(&submission)?;

        let _guard = self.lock.lock().await;
        let mut submissions = self.load().await?.unwrap_or_default();
        submissions.push(submission);
        self.persist(&submissions).await?;

        Ok(submissions.len())
    }

    pub async fn list_all(&self) -> StoreResult<Vec<Submission>> {
        let _guard = self.lock.lock().await;
        self.load_existing().await
    }

    /// Remove the submission at `index`; later submissions shift down by one.
    pub async fn delete_at(&self, index: i64) -> StoreResult<Submission> {
        let _guard = self.lock.lock().await;
        let mut submissions = self.load_existing().await?;
        let position = checked_position(index, submissions.len())?;

        let removed = submissions.remove(position);
        self.persist(&submissions).await?;

        Ok(removed)
    }

    /// Overwrite the submission at `index`, returning the previous one.
    pub async fn replace_at(&self, index: i64, submission: Submission) -> StoreResult<Submission> {
        ensure_complete(&submission)?;

        let _guard = self.lock.lock().await;
        let mut submissions = self.load_existing().await?;
        let position = checked_position(index, submissions.len())?;

        let previous = std::mem::replace(&mut submissions[position], submission);
        self.persist(&submissions).await?;

        Ok(previous)
    }

    /// Exact, case-sensitive match on `email`, in stored order.
    pub async fn find_by_email(&self, email: &str) -> StoreResult<Vec<Submission>> {
        let _guard = self.lock.lock().await;
        let matches: Vec<Submission> = self
            .load_existing()
            .await?
            .into_iter()
            .filter(|submission| submission.email == email)
            .collect();

        if matches.is_empty() {
            return Err(StoreError::NoMatches(email.to_string()));
        }

        Ok(matches)
    }

    async fn load_existing(&self) -> StoreResult<Vec<Submission>> {
        self.load().await?.ok_or(StoreError::NoSubmissions)
    }

    /// `None` when the file has never been written.
    async fn load(&self) -> StoreResult<Option<Vec<Submission>>> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let submissions: Vec<Submission> = serde_json::from_str(&data)?;
        debug!(path = %self.path.display(), count = submissions.len(), "Loaded submissions");
        Ok(Some(submissions))
    }

    /// Replace the file's full contents via a sibling temp file and rename.
    async fn persist(&self, submissions: &[Submission]) -> StoreResult<()> {
        let data = serde_json::to_string_pretty(submissions)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!(path = %self.path.display(), count = submissions.len(), "Persisted submissions");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "submissions".to_string());

        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()))
    }
}

fn ensure_complete(submission: &Submission) -> StoreResult<()> {
    match submission.missing_field() {
        Some(field) => Err(StoreError::MissingField(field)),
        None => Ok(()),
    }
}

fn checked_position(index: i64, len: usize) -> StoreResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|position| *position < len)
        .ok_or(StoreError::InvalidIndex { index, len })
}
