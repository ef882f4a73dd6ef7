//! Error types shared across the task list.

use std::path::PathBuf;

use thiserror::Error;

/// A date or time string that does not name a valid calendar value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid date '{0}', expected yyyy-mm-dd")]
    InvalidDate(String),

    #[error("invalid time '{0}', expected hh:mm")]
    InvalidTime(String),
}

/// Failures reading or writing the JSON task file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed task file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("task {position} in {path} is invalid: {reason}")]
    InvalidTask {
        path: PathBuf,
        position: usize,
        reason: String,
    },

    #[error("failed to encode tasks: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failures that end an interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Render(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
