use std::fs;
use std::path::{Path, PathBuf};

use alloy_primitives::ChainId;
use anyhow::Context;
use serde::Deserialize;

use crate::domain::chain::{default_chains, ChainInfo};
use crate::infrastructure::network::NetworkConfig;

pub const DEFAULT_LOG_FILTER: &str = "info,post_project=debug";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkSection {
    /// HTTP JSON-RPC endpoint asked for `eth_chainId`
    pub rpc: Option<String>,
    /// Fixed current chain when no endpoint is set
    pub chain_id: Option<ChainId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogSection {
    pub filter: Option<String>,
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkSection,

    /// Destination chains offered by the selector
    #[serde(default)]
    pub chains: Vec<ChainInfo>,

    #[serde(default)]
    pub log: LogSection,
}

/// Command line values that win over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rpc: Option<String>,
    pub chain_id: Option<ChainId>,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str::<Config>(content).context("Invalid config file")
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    /// Configured chains, or the built-in Avalanche list when none are set
    pub fn chains(&self) -> Vec<ChainInfo> {
        if self.chains.is_empty() {
            default_chains()
        } else {
            self.chains.clone()
        }
    }

    /// An explicit RPC beats a fixed chain id; the command line beats the
    /// file.
    pub fn network_config(&self, overrides: &Overrides) -> NetworkConfig {
        if let Some(rpc) = overrides.rpc.clone().filter(|s| !s.trim().is_empty()) {
            return NetworkConfig::Http(rpc);
        }
        if let Some(chain_id) = overrides.chain_id {
            return NetworkConfig::Static(Some(chain_id));
        }
        if let Some(rpc) = self.network.rpc.clone().filter(|s| !s.trim().is_empty()) {
            return NetworkConfig::Http(rpc);
        }
        NetworkConfig::Static(self.network.chain_id)
    }

    pub fn log_filter(&self) -> String {
        self.log
            .filter
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    pub fn log_dir(&self, overrides: &Overrides) -> Option<PathBuf> {
        overrides
            .log_dir
            .clone()
            .or_else(|| self.log.dir.clone())
            .or_else(logs_dir)
    }
}

/// Load the config file. A missing file yields defaults; a broken one is an
/// error the caller may report and ignore.
pub fn load() -> anyhow::Result<Config> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    Config::load_from(&path)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("POST_PROJECT_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("post-project").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("post-project").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "post-project", "post-project")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("post-project"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("post-project"));
    }
    directories::ProjectDirs::from("io", "post-project", "post-project")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn logs_dir() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("logs"))
}
