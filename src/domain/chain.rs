//! Chain catalog offered by the destination chain selector

use alloy_primitives::ChainId;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainInfo {
    pub id: ChainId,
    pub name: String,
}

impl ChainInfo {
    pub fn new(id: ChainId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Avalanche networks known out of the box
pub fn default_chains() -> Vec<ChainInfo> {
    vec![
        ChainInfo::new(43114, "Avalanche C-Chain"),
        ChainInfo::new(43113, "Avalanche Fuji"),
        ChainInfo::new(53935, "DFK Chain"),
        ChainInfo::new(779672, "Dispatch Testnet"),
    ]
}

pub fn chain_name(chains: &[ChainInfo], id: ChainId) -> Option<&str> {
    chains
        .iter()
        .find(|chain| chain.id == id)
        .map(|chain| chain.name.as_str())
}

/// "Avalanche Fuji (43113)", or just the id for unknown chains
pub fn describe_chain(chains: &[ChainInfo], id: ChainId) -> String {
    match chain_name(chains, id) {
        Some(name) => format!("{name} ({id})"),
        None => format!("Chain {id}"),
    }
}
