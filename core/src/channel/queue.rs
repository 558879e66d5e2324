// Main queue — the single UI-confined execution context
//
// The host channel's reply object may only be completed from one thread.
// SDK callbacks fire from arbitrary worker threads, so every asynchronous
// response is handed off through this queue rather than completed in place.

use std::sync::mpsc;
use std::thread;

/// Commands accepted by the queue worker.
enum QueueCommand {
    /// Run a task on the queue thread.
    Run(Box<dyn FnOnce() + Send>),
    /// Drain nothing further and exit the worker.
    Shutdown,
}

/// Cloneable handle to the queue worker thread.
///
/// Tasks run in FIFO order on a single dedicated thread. There is no
/// cancellation and no timeout: a task that never gets posted because the
/// queue is shut down is logged and dropped, matching the bridge's
/// fire-and-forget contract.
#[derive(Clone)]
pub struct MainQueue {
    command_tx: mpsc::Sender<QueueCommand>,
}

impl MainQueue {
    /// Spawn the worker thread and return a handle to it.
    pub fn spawn() -> Self {
        let (command_tx, command_rx) = mpsc::channel::<QueueCommand>();

        thread::spawn(move || {
            while let Ok(command) = command_rx.recv() {
                match command {
                    QueueCommand::Run(task) => task(),
                    QueueCommand::Shutdown => break,
                }
            }
            tracing::debug!("Main queue worker exiting");
        });

        Self { command_tx }
    }

    /// Submit a task. Posting to a shut-down queue is a logged no-op.
    pub fn post<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self
            .command_tx
            .send(QueueCommand::Run(Box::new(task)))
            .is_err()
        {
            tracing::warn!("Dropping task posted to a shut-down main queue");
        }
    }

    /// Stop the worker. Tasks already queued ahead of the shutdown still run;
    /// anything posted afterwards is dropped.
    pub fn shutdown(&self) {
        let _ = self.command_tx.send(QueueCommand::Shutdown);
    }
}
