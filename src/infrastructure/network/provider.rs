//! Network context implementations
//!
//! The current chain id either comes from configuration or is read from an
//! HTTP JSON-RPC endpoint with `eth_chainId`.

use alloy::network::Ethereum;
use alloy::providers::{
    fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
    Identity, Provider, ProviderBuilder, RootProvider,
};
use alloy_primitives::ChainId;
use anyhow::{Context, Result};

/// Where the current chain id comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkConfig {
    /// Fixed chain id (or none at all)
    Static(Option<ChainId>),
    /// HTTP JSON-RPC endpoint queried for `eth_chainId`
    Http(String),
}

impl NetworkConfig {
    /// Get display name for this source
    pub fn display(&self) -> String {
        match self {
            NetworkConfig::Static(_) => "static".to_string(),
            NetworkConfig::Http(url) => url.clone(),
        }
    }
}

/// Exposes the chain the user is currently connected to
#[async_trait::async_trait]
pub trait NetworkContext: Send + Sync + 'static {
    /// Current chain id, `None` when not connected to any chain
    async fn current_chain_id(&self) -> Result<Option<ChainId>>;

    /// Get source display name
    fn source_name(&self) -> String;
}

type HttpFillProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider,
    Ethereum,
>;

struct StaticNetwork {
    chain_id: Option<ChainId>,
}

struct RpcNetwork {
    provider: HttpFillProvider,
    endpoint: String,
}

/// Create a network context from configuration
pub fn create_network(config: NetworkConfig) -> Result<Box<dyn NetworkContext>> {
    match config {
        NetworkConfig::Static(chain_id) => Ok(Box::new(StaticNetwork { chain_id })),
        NetworkConfig::Http(url) => {
            let endpoint = normalize_http_endpoint(&url);
            let rpc_url = endpoint.parse().context("Invalid HTTP URL")?;
            let provider = ProviderBuilder::new().connect_http(rpc_url);
            Ok(Box::new(RpcNetwork { provider, endpoint }))
        }
    }
}

#[async_trait::async_trait]
impl NetworkContext for StaticNetwork {
    async fn current_chain_id(&self) -> Result<Option<ChainId>> {
        Ok(self.chain_id)
    }

    fn source_name(&self) -> String {
        "static".to_string()
    }
}

#[async_trait::async_trait]
impl NetworkContext for RpcNetwork {
    async fn current_chain_id(&self) -> Result<Option<ChainId>> {
        let chain_id = self
            .provider
            .get_chain_id()
            .await
            .with_context(|| format!("eth_chainId failed on {}", self.endpoint))?;
        Ok(Some(chain_id))
    }

    fn source_name(&self) -> String {
        self.endpoint.clone()
    }
}

pub fn normalize_http_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_http_endpoint() {
        assert_eq!(
            normalize_http_endpoint(" localhost:9650 "),
            "http://localhost:9650"
        );
        assert_eq!(
            normalize_http_endpoint("https://api.avax-test.network/ext/bc/C/rpc"),
            "https://api.avax-test.network/ext/bc/C/rpc"
        );
    }

    #[tokio::test]
    async fn test_static_network_reports_configured_chain() {
        let network = create_network(NetworkConfig::Static(Some(43113))).unwrap();
        assert_eq!(network.current_chain_id().await.unwrap(), Some(43113));
        assert_eq!(network.source_name(), "static");

        let offline = create_network(NetworkConfig::Static(None)).unwrap();
        assert_eq!(offline.current_chain_id().await.unwrap(), None);
    }

    #[test]
    fn test_rpc_network_rejects_bad_url() {
        assert!(create_network(NetworkConfig::Http("http://[::1".into())).is_err());
    }
}
