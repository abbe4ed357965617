//! Applies backend events to the state the window renders from.

use client_core::{DirectoryDocument, QueryOutcome};

use crate::controller::events::UiEvent;

#[derive(Debug, Default)]
pub struct ViewState {
    pub document: DirectoryDocument,
    pub status: String,
    /// Sequence number of the newest result shown.
    pub shown_seq: Option<u64>,
}

pub fn reduce(state: &mut ViewState, event: UiEvent) {
    match event {
        UiEvent::Info(message) => state.status = message,
        UiEvent::Rendered { outcome, document } => {
            // Snapshots can arrive out of order across the channel; never step back.
            let newest = document.last_rendered_seq();
            if newest < state.shown_seq {
                return;
            }
            state.shown_seq = newest;
            state.document = document;
            if let QueryOutcome::Rendered { filter, rows, .. } = outcome {
                state.status = if filter.is_empty() {
                    format!("{rows} people")
                } else {
                    format!("{rows} matching \"{filter}\"")
                };
            }
        }
        UiEvent::Superseded { seq, latest } => {
            tracing::debug!(seq, latest, "ignoring superseded query result");
        }
        UiEvent::Error(err) => {
            tracing::warn!(category = ?err.category(), "showing backend error");
            state.status = err.status_line();
        }
    }
}
