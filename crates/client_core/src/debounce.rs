//! Trailing-edge debounce for bursts of input values.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Spawns a task that forwards a value only after `delay` passes with no newer
/// value arriving. Intermediate values are dropped.
///
/// Dropping the returned sender flushes any pending value and then closes the
/// output. Must be called from within a tokio runtime.
pub fn spawn_debouncer<T>(delay: Duration) -> (UnboundedSender<T>, UnboundedReceiver<T>)
where
    T: Send + 'static,
{
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<T>();
    let (output_tx, output_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Some(mut pending) = input_rx.recv().await {
            loop {
                match tokio::time::timeout(delay, input_rx.recv()).await {
                    Ok(Some(newer)) => pending = newer,
                    Ok(None) => {
                        let _ = output_tx.send(pending);
                        return;
                    }
                    Err(_elapsed) => {
                        if output_tx.send(pending).is_err() {
                            return;
                        }
                        break;
                    }
                }
            }
        }
    });

    (input_tx, output_rx)
}

#[cfg(test)]
#[path = "tests/debounce_tests.rs"]
mod tests;
