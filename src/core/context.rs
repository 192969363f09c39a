//! Shared context passed to modules

use alloy_primitives::ChainId;

use crate::domain::chain::{self, ChainInfo};

/// Shared context available to all modules
#[derive(Debug, Clone)]
pub struct Context {
    /// Chain the user is connected to, once known
    pub current_chain_id: Option<ChainId>,

    /// Chains offered by the destination selector
    pub chains: Vec<ChainInfo>,

    /// Where the current chain id came from (RPC url or "static")
    pub network_source: String,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            current_chain_id: None,
            chains: chain::default_chains(),
            network_source: String::new(),
        }
    }
}

impl Context {
    pub fn new(chains: Vec<ChainInfo>) -> Self {
        Self {
            chains,
            ..Self::default()
        }
    }

    /// Human readable name for a chain id
    pub fn chain_label(&self, id: ChainId) -> String {
        chain::describe_chain(&self.chains, id)
    }

    pub fn current_chain_label(&self) -> String {
        self.current_chain_id
            .map(|id| self.chain_label(id))
            .unwrap_or_else(|| "unknown".to_string())
    }
}
