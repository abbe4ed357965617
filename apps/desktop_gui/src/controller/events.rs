//! UI/backend events and error modeling for desktop GUI controller.

use client_core::{DirectoryDocument, QueryOutcome};
use shared::error::{ErrorCode, LoadFailure};

pub enum UiEvent {
    Info(String),
    Rendered {
        outcome: QueryOutcome,
        document: DirectoryDocument,
    },
    Superseded {
        seq: u64,
        latest: u64,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Query,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    /// The worker thread could not start; no query will ever run.
    pub fn backend_startup(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Unknown,
            context: UiErrorContext::BackendStartup,
            message: message.into(),
        }
    }

    pub fn from_failure(context: UiErrorContext, failure: &LoadFailure) -> Self {
        let category = match failure.code {
            ErrorCode::Unreachable => UiErrorCategory::Transport,
            ErrorCode::MalformedDocument => UiErrorCategory::Validation,
        };
        Self {
            category,
            context,
            message: failure.message.clone(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    /// One-line status text for the window footer.
    pub fn status_line(&self) -> String {
        let prefix = match (self.context, self.category) {
            (UiErrorContext::BackendStartup, _) => "Backend unavailable",
            (_, UiErrorCategory::Transport) => "Dataset unreachable",
            (_, UiErrorCategory::Validation) => "Dataset malformed",
            (_, UiErrorCategory::Unknown) => "Error",
        };
        format!("{prefix}: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_load_failures_by_code() {
        let err = UiError::from_failure(
            UiErrorContext::Query,
            &LoadFailure::new(ErrorCode::MalformedDocument, "missing field `people`"),
        );
        assert_eq!(err.category(), UiErrorCategory::Validation);
        assert_eq!(err.status_line(), "Dataset malformed: missing field `people`");
    }

    #[test]
    fn unreachable_dataset_is_transport_error() {
        let err = UiError::from_failure(
            UiErrorContext::Query,
            &LoadFailure::new(ErrorCode::Unreachable, "connection refused"),
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
        assert_eq!(err.status_line(), "Dataset unreachable: connection refused");
    }

    #[test]
    fn startup_failures_mention_backend() {
        let err =
            UiError::backend_startup("backend worker startup failure: failed to build runtime: boom");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(
            err.status_line(),
            "Backend unavailable: backend worker startup failure: failed to build runtime: boom"
        );
    }
}
