use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The dataset could not be fetched or read.
    Unreachable,
    /// The dataset was fetched but is not a valid people document.
    MalformedDocument,
}

/// Front-end facing summary of a failed load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{code:?}: {message}")]
pub struct LoadFailure {
    pub code: ErrorCode,
    pub message: String,
}

impl LoadFailure {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_unreachable(&self) -> bool {
        self.code == ErrorCode::Unreachable
    }
}
