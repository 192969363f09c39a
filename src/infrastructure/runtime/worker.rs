//! Async worker - runs in Tokio runtime and handles network and submission work

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::time::interval;

use crate::infrastructure::crosschain::CrossChainActions;
use crate::infrastructure::network::{create_network, NetworkConfig, NetworkContext};
use crate::infrastructure::runtime::bridge::{RuntimeCommand, RuntimeEvent};
use crate::modules::post_project::SubmissionHandler;

/// Run the async worker loop until `Shutdown` arrives or the TUI drops its
/// sender.
pub async fn run_async_worker(
    network: NetworkConfig,
    cross_chain: Arc<dyn CrossChainActions>,
    cmd_rx: Receiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
) -> Result<()> {
    let network: Arc<dyn NetworkContext> = match create_network(network.clone()) {
        Ok(ctx) => Arc::from(ctx),
        Err(err) => {
            let _ = evt_tx.send(RuntimeEvent::Error {
                message: format!("Network setup failed ({}): {:#}", network.display(), err),
            });
            Arc::from(create_network(NetworkConfig::Static(None))?)
        }
    };
    let handler = Arc::new(SubmissionHandler::new(cross_chain));

    spawn_detect(network.clone(), evt_tx.clone());

    let mut poll_interval = interval(Duration::from_millis(50));
    loop {
        loop {
            let cmd = match cmd_rx.try_recv() {
                Ok(cmd) => cmd,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            };
            match cmd {
                RuntimeCommand::Shutdown => {
                    tracing::debug!("runtime worker shutting down");
                    return Ok(());
                }
                RuntimeCommand::DetectNetwork => spawn_detect(network.clone(), evt_tx.clone()),
                RuntimeCommand::SubmitProject { request } => {
                    let handler = handler.clone();
                    let evt_tx = evt_tx.clone();
                    tokio::spawn(async move {
                        let outcome = handler.run(request).await;
                        let _ = evt_tx.send(RuntimeEvent::SubmissionFinished { outcome });
                    });
                }
            }
        }
        poll_interval.tick().await;
    }
}

fn spawn_detect(network: Arc<dyn NetworkContext>, evt_tx: Sender<RuntimeEvent>) {
    tokio::spawn(async move {
        let source = network.source_name();
        match network.current_chain_id().await {
            Ok(chain_id) => {
                tracing::info!(?chain_id, %source, "network detected");
                let _ = evt_tx.send(RuntimeEvent::NetworkDetected { chain_id, source });
            }
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), %source, "network detection failed");
                let _ = evt_tx.send(RuntimeEvent::Error {
                    message: format!("Chain detection failed: {:#}", err),
                });
            }
        }
    });
}
