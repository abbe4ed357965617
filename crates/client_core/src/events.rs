//! Binding of input signals to orchestrator queries.

use std::{sync::Arc, time::Duration};

use shared::error::LoadFailure;
use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender},
    task::JoinSet,
};
use tracing::{debug, warn};

use crate::{
    debounce::spawn_debouncer,
    orchestrator::{QueryOrchestrator, QueryOutcome},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    /// The document finished loading; lists everyone.
    DocumentLoaded,
    /// Free-text field changed.
    NameInput(String),
    FirstNameSelected(String),
    LastNameSelected(String),
}

impl DirectoryEvent {
    fn is_debounced(&self) -> bool {
        matches!(self, Self::NameInput(_))
    }
}

/// Filter string a given event queries with.
pub fn query_for(event: &DirectoryEvent) -> String {
    match event {
        DirectoryEvent::DocumentLoaded => String::new(),
        DirectoryEvent::NameInput(value)
        | DirectoryEvent::FirstNameSelected(value)
        | DirectoryEvent::LastNameSelected(value) => value.to_lowercase(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryReport {
    Completed(QueryOutcome),
    Failed { filter: String, failure: LoadFailure },
}

pub struct EventRouter {
    orchestrator: Arc<QueryOrchestrator>,
    debounce: Duration,
}

impl EventRouter {
    pub fn new(orchestrator: Arc<QueryOrchestrator>, debounce: Duration) -> Self {
        Self {
            orchestrator,
            debounce,
        }
    }

    /// Consumes events until the sender side closes, then waits for every
    /// spawned query to finish. Each query runs as its own task, so slow loads
    /// never block later events.
    pub async fn run(
        self,
        mut events: UnboundedReceiver<DirectoryEvent>,
        reports: UnboundedSender<QueryReport>,
    ) {
        let (text_tx, mut text_rx) = spawn_debouncer::<String>(self.debounce);
        let mut text_tx = Some(text_tx);
        let mut tasks = JoinSet::new();

        loop {
            tokio::select! {
                event = events.recv(), if text_tx.is_some() => match event {
                    Some(event) if event.is_debounced() => {
                        if let Some(tx) = &text_tx {
                            let _ = tx.send(query_for(&event));
                        }
                    }
                    Some(event) => self.dispatch(&mut tasks, query_for(&event), &reports),
                    None => text_tx = None,
                },
                filter = text_rx.recv() => match filter {
                    Some(filter) => self.dispatch(&mut tasks, filter, &reports),
                    None => break,
                },
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(err) = joined {
                        warn!("query task aborted: {err}");
                    }
                }
            }
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(err) = joined {
                warn!("query task aborted: {err}");
            }
        }
    }

    fn dispatch(
        &self,
        tasks: &mut JoinSet<()>,
        filter: String,
        reports: &UnboundedSender<QueryReport>,
    ) {
        let ticket = self.orchestrator.issue();
        debug!(seq = ticket.seq(), filter = %filter, "dispatching query");
        let orchestrator = Arc::clone(&self.orchestrator);
        let reports = reports.clone();
        tasks.spawn(async move {
            let result = orchestrator.complete(ticket, &filter).await;
            let report = match result {
                Ok(outcome) => QueryReport::Completed(outcome),
                Err(err) => QueryReport::Failed {
                    failure: LoadFailure::from(&err),
                    filter,
                },
            };
            let _ = reports.send(report);
        });
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
