//! CLI error type.

use forms::{StorageError, SubmitError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error("token storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("cannot estimate: {0}")]
    InvalidEstimate(String),
}

impl CliError {
    /// Submission failures have already been shown through the notifier.
    #[must_use]
    pub fn already_reported(&self) -> bool {
        matches!(self, Self::Submit(_))
    }
}
