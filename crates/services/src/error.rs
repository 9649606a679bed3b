//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors from loading the question file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("record {record} has {fields} fields, expected 2")]
    Format { record: usize, fields: usize },
    #[error(transparent)]
    Read(#[from] csv::Error),
}

/// Errors from running a single attempt.
///
/// A timed-out attempt is not an error; it comes back as a normal report
/// with `AttemptOutcome::TimedOut`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("input closed before the attempt finished")]
    InputClosed,
    #[error("too many questions for one attempt: {len}")]
    TooManyQuestions { len: usize },
    #[error("could not write prompt: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors emitted by the session driver.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}
