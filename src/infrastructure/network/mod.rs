//! Network context - tells the wizard which chain the user is on

mod provider;

pub use provider::{create_network, normalize_http_endpoint, NetworkConfig, NetworkContext};
