use std::path::PathBuf;

use shared::error::{ErrorCode, LoadFailure};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch people dataset from {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },
    #[error("people dataset request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read people dataset '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed people dataset from {location}: {source}")]
    Parse {
        location: String,
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Fetch { .. } | Self::Status { .. } | Self::Read { .. } => ErrorCode::Unreachable,
            Self::Parse { .. } => ErrorCode::MalformedDocument,
        }
    }
}

impl From<&LoadError> for LoadFailure {
    fn from(value: &LoadError) -> Self {
        LoadFailure::new(value.code(), value.to_string())
    }
}
