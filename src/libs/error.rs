//! Error taxonomy surfaced by the task core.
//!
//! - [`TaskError::Validation`]: the caller supplied empty task text.
//! - [`TaskError::Backend`]: the remote task service failed (transport error or
//!   non-2xx status). The message is the server's `error` field when present.
//! - [`TaskError::Storage`]: a local slot could not be read or written.
//!
//! Validation and backend errors are meant for the user; storage errors are
//! logged and swallowed by the manager except where noted.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Backend(String),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl TaskError {
    pub fn empty_text() -> Self {
        TaskError::Validation("Please enter a task!".to_string())
    }

    pub fn http_status(status: u16) -> Self {
        TaskError::Backend(format!("HTTP Error: {}", status))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation(_))
    }

    pub fn is_backend(&self) -> bool {
        matches!(self, TaskError::Backend(_))
    }
}

impl From<reqwest::Error> for TaskError {
    fn from(err: reqwest::Error) -> Self {
        TaskError::Backend(err.to_string())
    }
}

impl From<std::io::Error> for TaskError {
    fn from(err: std::io::Error) -> Self {
        TaskError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(err: serde_json::Error) -> Self {
        TaskError::Storage(err.to_string())
    }
}

impl From<tempfile::PersistError> for TaskError {
    fn from(err: tempfile::PersistError) -> Self {
        TaskError::Storage(err.error.to_string())
    }
}
