//! Load → filter → sort → render pipeline driven by filter strings.
//!
//! Queries may overlap. Each one takes a sequence number when issued and its
//! result is only rendered if no later-issued query has rendered already, so
//! the document always reflects the newest query that has completed.

use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Arc,
};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    error::LoadError,
    filter::filter_people,
    loader::PeopleSource,
    ordering::sort_people,
    render::{render_entries, ListContainer},
    selectors::NameSelectors,
};

/// Everything the pipeline renders into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryDocument {
    pub list: ListContainer,
    pub selectors: NameSelectors,
    last_rendered_seq: Option<u64>,
}

impl DirectoryDocument {
    pub fn last_rendered_seq(&self) -> Option<u64> {
        self.last_rendered_seq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    Idle,
    Loading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Rendered {
        seq: u64,
        filter: String,
        rows: usize,
        populated_selectors: bool,
    },
    /// A newer query rendered first; this result was dropped.
    Superseded { seq: u64, latest: u64 },
}

impl QueryOutcome {
    pub fn seq(&self) -> u64 {
        match self {
            Self::Rendered { seq, .. } | Self::Superseded { seq, .. } => *seq,
        }
    }
}

/// An issued query that has not completed yet. Keeps the orchestrator in
/// [`QueryState::Loading`] until dropped.
#[derive(Debug)]
pub struct QueryTicket {
    seq: u64,
    in_flight: Arc<AtomicUsize>,
}

impl QueryTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl Drop for QueryTicket {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct QueryOrchestrator {
    source: Arc<dyn PeopleSource>,
    document: Mutex<DirectoryDocument>,
    next_seq: AtomicU64,
    in_flight: Arc<AtomicUsize>,
}

impl QueryOrchestrator {
    pub fn new(source: Arc<dyn PeopleSource>) -> Self {
        Self {
            source,
            document: Mutex::new(DirectoryDocument::default()),
            next_seq: AtomicU64::new(1),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn state(&self) -> QueryState {
        if self.in_flight.load(Ordering::SeqCst) == 0 {
            QueryState::Idle
        } else {
            QueryState::Loading
        }
    }

    /// Snapshot of the current document.
    pub async fn document(&self) -> DirectoryDocument {
        self.document.lock().await.clone()
    }

    /// Reserves the next sequence number and enters the loading state.
    pub fn issue(&self) -> QueryTicket {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        QueryTicket {
            seq: self.next_seq.fetch_add(1, Ordering::SeqCst),
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    /// Issues and runs a query in one step.
    pub async fn run_query(&self, filter: &str) -> Result<QueryOutcome, LoadError> {
        let ticket = self.issue();
        self.complete(ticket, filter).await
    }

    /// Loads the dataset for an issued query and renders it unless superseded.
    ///
    /// Load failures are returned untouched and leave the document as it was.
    pub async fn complete(
        &self,
        ticket: QueryTicket,
        filter: &str,
    ) -> Result<QueryOutcome, LoadError> {
        let seq = ticket.seq();
        debug!(seq, filter, source = %self.source.describe(), "query issued");

        let people = match self.source.load_people().await {
            Ok(people) => people,
            Err(err) => {
                warn!(seq, filter, "people dataset load failed: {err}");
                return Err(err);
            }
        };

        let filtered = filter_people(&people, filter);
        let sorted = sort_people(filtered);

        let mut document = self.document.lock().await;
        if let Some(latest) = document.last_rendered_seq {
            if seq <= latest {
                debug!(seq, latest, "discarding superseded query result");
                return Ok(QueryOutcome::Superseded { seq, latest });
            }
        }

        let populated_selectors = document.selectors.populate_once(&sorted);
        document.list.replace(render_entries(sorted.iter().copied()));
        document.last_rendered_seq = Some(seq);
        info!(
            seq,
            filter,
            rows = sorted.len(),
            populated_selectors,
            "rendered people list"
        );

        Ok(QueryOutcome::Rendered {
            seq,
            filter: filter.to_string(),
            rows: sorted.len(),
            populated_selectors,
        })
    }
}

#[cfg(test)]
#[path = "tests/orchestrator_tests.rs"]
mod tests;
