//! Runtime bridge - connects sync TUI thread with async Tokio runtime
//!
//! The TUI never awaits. It sends commands over a std channel and drains
//! events once per frame; the worker thread owns a Tokio runtime and does
//! the chain lookups and submissions.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use alloy_primitives::ChainId;
use anyhow::Context;
use tokio::runtime::Runtime;

use crate::domain::project::SubmissionRequest;
use crate::infrastructure::crosschain::CrossChainActions;
use crate::infrastructure::network::NetworkConfig;
use crate::infrastructure::runtime::worker::run_async_worker;
use crate::modules::post_project::SubmissionOutcome;

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone)]
pub enum RuntimeCommand {
    /// Look up the current chain id again
    DetectNetwork,
    /// Run a project submission to completion
    SubmitProject { request: SubmissionRequest },
    /// Shutdown the worker
    Shutdown,
}

/// Events sent from the async worker to the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// Current chain id resolved (`None` when not connected)
    NetworkDetected {
        chain_id: Option<ChainId>,
        source: String,
    },
    /// A submission settled, successfully or not
    SubmissionFinished { outcome: SubmissionOutcome },
    /// Error occurred
    Error { message: String },
    /// The worker thread is gone; no further events will arrive
    WorkerLost,
}

/// Bridge between sync TUI thread and async Tokio runtime
pub struct RuntimeBridge {
    cmd_tx: Sender<RuntimeCommand>,
    evt_rx: Receiver<RuntimeEvent>,
    disconnected: bool,
}

impl RuntimeBridge {
    /// Start the worker thread. Detection of the current chain starts
    /// immediately.
    pub fn new(
        network: NetworkConfig,
        cross_chain: Arc<dyn CrossChainActions>,
    ) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<RuntimeCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<RuntimeEvent>();

        let rt = Runtime::new().context("Failed to create Tokio runtime")?;
        thread::Builder::new()
            .name("post-project-runtime".to_string())
            .spawn(move || {
                rt.block_on(async {
                    if let Err(err) =
                        run_async_worker(network, cross_chain, cmd_rx, evt_tx.clone()).await
                    {
                        let _ = evt_tx.send(RuntimeEvent::Error {
                            message: format!("Worker exited: {:#}", err),
                        });
                    }
                });
            })
            .context("Failed to spawn runtime thread")?;

        Ok(Self {
            cmd_tx,
            evt_rx,
            disconnected: false,
        })
    }

    /// Send a command to the async worker
    pub fn send(&self, cmd: RuntimeCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("Worker channel closed"))
    }

    /// Poll for events (non-blocking). Reports `WorkerLost` once when the
    /// worker side hangs up.
    pub fn poll_events(&mut self) -> Vec<RuntimeEvent> {
        let mut events = Vec::new();
        loop {
            match self.evt_rx.try_recv() {
                Ok(evt) => events.push(evt),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.disconnected {
                        self.disconnected = true;
                        events.push(RuntimeEvent::WorkerLost);
                    }
                    break;
                }
            }
        }
        events
    }
}

impl Drop for RuntimeBridge {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(RuntimeCommand::Shutdown);
    }
}
