//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - Alloy-based network context (current chain id)
//! - Cross-chain action provider
//! - Tokio runtime bridge for async operations

pub mod crosschain;
pub mod network;
pub mod runtime;
