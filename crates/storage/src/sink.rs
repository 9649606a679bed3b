use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use quiz_core::model::AttemptResult;

/// Errors surfaced by score persistence adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("score file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("lock error: {0}")]
    Lock(String),
}

/// Destination for per-attempt score records.
#[async_trait]
pub trait ScoreSink: Send + Sync {
    /// Append one score record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    async fn append(&self, result: &AttemptResult) -> Result<(), StorageError>;
}

/// Appends `"Score: <n>/<total>"` lines to a flat file.
///
/// The file is created on first use; existing content is never truncated, so
/// repeated attempts accumulate one line each in order.
#[derive(Debug, Clone)]
pub struct FileScoreSink {
    path: PathBuf,
}

impl FileScoreSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ScoreSink for FileScoreSink {
    async fn append(&self, result: &AttemptResult) -> Result<(), StorageError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(format!("Score: {result}\n").as_bytes()).await?;
        file.flush().await?;
        debug!("appended score {result} to {}", self.path.display());
        Ok(())
    }
}

/// Records scores in memory, for tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryScoreSink {
    records: Mutex<Vec<AttemptResult>>,
}

impl InMemoryScoreSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, in order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Lock` if the record mutex is poisoned.
    pub fn recorded(&self) -> Result<Vec<AttemptResult>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl ScoreSink for InMemoryScoreSink {
    async fn append(&self, result: &AttemptResult) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        guard.push(*result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: u32, total: u32) -> AttemptResult {
        AttemptResult::from_parts(score, total).unwrap()
    }

    #[tokio::test]
    async fn file_sink_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        let sink = FileScoreSink::new(&path);

        sink.append(&result(3, 5)).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Score: 3/5\n");
    }

    #[tokio::test]
    async fn file_sink_preserves_prior_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        let sink = FileScoreSink::new(&path);

        sink.append(&result(3, 5)).await.unwrap();
        sink.append(&result(5, 5)).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Score: 3/5\nScore: 5/5\n");
    }

    #[tokio::test]
    async fn file_sink_does_not_truncate_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        std::fs::write(&path, "Score: 1/5\n").unwrap();

        let sink = FileScoreSink::new(&path);
        sink.append(&result(2, 5)).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Score: 1/5\nScore: 2/5\n");
    }

    #[tokio::test]
    async fn in_memory_sink_records_in_order() {
        let sink = InMemoryScoreSink::new();
        sink.append(&result(0, 3)).await.unwrap();
        sink.append(&result(3, 3)).await.unwrap();

        let recorded = sink.recorded().unwrap();
        assert_eq!(recorded, vec![result(0, 3), result(3, 3)]);
    }
}
