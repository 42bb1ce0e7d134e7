//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{BankError, SessionStateError};
use storage::repository::StorageError;

/// Errors emitted by the quiz session controller and loop service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session already completed")]
    Completed,
    #[error("session is still in progress")]
    InProgress,
    #[error("stored session does not match the question bank (index {index}, {len} questions)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    State(SessionStateError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<SessionStateError> for SessionError {
    fn from(err: SessionStateError) -> Self {
        match err {
            SessionStateError::Completed => SessionError::Completed,
            SessionStateError::InProgress => SessionError::InProgress,
            SessionStateError::IndexOutOfRange { index, len } => {
                SessionError::IndexOutOfRange { index, len }
            }
            other => SessionError::State(other),
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Bank(#[from] BankError),
}
