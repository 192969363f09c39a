//! Cross-chain action provider
//!
//! Only a demo implementation exists: it records the request in the log and
//! hands back a receipt without touching any chain.

use std::sync::atomic::{AtomicBool, Ordering};

use alloy_primitives::ChainId;
use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::project::ProjectListing;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossChainProjectRequest {
    pub listing: ProjectListing,
    pub source_chain_id: Option<ChainId>,
    pub destination_chain_id: ChainId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossChainReceipt {
    pub destination_chain_id: ChainId,
    /// Nothing was sent on-chain
    pub demo: bool,
}

/// Creates projects that span two chains
#[async_trait::async_trait]
pub trait CrossChainActions: Send + Sync + 'static {
    async fn create_cross_chain_project(
        &self,
        request: CrossChainProjectRequest,
    ) -> Result<CrossChainReceipt>;

    /// True while a creation call is running
    fn is_loading(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct DemoCrossChain {
    loading: AtomicBool,
}

impl DemoCrossChain {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Clears the loading flag however the call exits
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn enter(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl CrossChainActions for DemoCrossChain {
    async fn create_cross_chain_project(
        &self,
        request: CrossChainProjectRequest,
    ) -> Result<CrossChainReceipt> {
        let _guard = LoadingGuard::enter(&self.loading);
        let payload =
            serde_json::to_string(&request).context("Failed to encode cross-chain request")?;
        tracing::info!(
            destination = request.destination_chain_id,
            source = ?request.source_chain_id,
            %payload,
            "demo cross-chain project request"
        );
        tokio::task::yield_now().await;
        Ok(CrossChainReceipt {
            destination_chain_id: request.destination_chain_id,
            demo: true,
        })
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}
