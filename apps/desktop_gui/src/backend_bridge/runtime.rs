//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread, time::Duration};

use client_core::{
    DataLocation, EventRouter, QueryOrchestrator, QueryOutcome, QueryReport,
};
use crossbeam_channel::{Receiver, Sender};
use tokio::sync::mpsc;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub struct BridgeConfig {
    pub location: DataLocation,
    pub debounce: Duration,
}

pub fn launch(config: BridgeConfig, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::backend_startup(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                ))));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info(format!(
            "Reading people from {}",
            config.location
        )));
        let orchestrator = Arc::new(QueryOrchestrator::new(config.location.into_source()));
        let router = EventRouter::new(Arc::clone(&orchestrator), config.debounce);
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (report_tx, mut report_rx) = mpsc::unbounded_channel();

        let router_task = runtime.spawn(router.run(event_rx, report_tx));
        let forward_tx = ui_tx.clone();
        let forward_task = runtime.spawn(async move {
            while let Some(report) = report_rx.recv().await {
                let event = match report {
                    QueryReport::Completed(outcome @ QueryOutcome::Rendered { .. }) => {
                        UiEvent::Rendered {
                            outcome,
                            document: orchestrator.document().await,
                        }
                    }
                    QueryReport::Completed(QueryOutcome::Superseded { seq, latest }) => {
                        UiEvent::Superseded { seq, latest }
                    }
                    QueryReport::Failed { filter, failure } => {
                        tracing::warn!(filter = %filter, "query failed: {failure}");
                        UiEvent::Error(UiError::from_failure(UiErrorContext::Query, &failure))
                    }
                };
                if forward_tx.try_send(event).is_err() {
                    tracing::warn!("backend->ui event queue unavailable; dropping query result");
                }
            }
        });

        while let Ok(cmd) = cmd_rx.recv() {
            let cmd_name = cmd.name();
            let BackendCommand::Event(event) = cmd;
            if event_tx.send(event).is_err() {
                tracing::error!(command = cmd_name, "event router stopped; ignoring command");
                break;
            }
        }

        drop(event_tx);
        runtime.block_on(async {
            let _ = router_task.await;
            let _ = forward_task.await;
        });
        tracing::info!("backend worker stopped");
    });
}
