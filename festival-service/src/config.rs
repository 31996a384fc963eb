// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration of the command-line client.
//!
//! Settings come from three layers: built-in defaults, an optional TOML file, and the
//! command line (including environment variables). Each layer overrides the previous
//! one.

use std::path::Path;

use festival_base::identifiers::Address;
use festival_core::{AssemblyPolicy, ViewOptions};
use festival_ledger::ipfs::{IpfsCredentials, DEFAULT_IPFS_API_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The node used when none is configured.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read the configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no greetings contract address is configured")]
    MissingContract,
}

/// The content of a configuration file. Every setting is optional.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub rpc_url: Option<String>,
    pub contract: Option<Address>,
    /// The account whose greetings are listed by default.
    pub account: Option<Address>,
    pub ipfs_gateway: Option<String>,
    /// The IPFS HTTP API receiving uploaded artwork.
    pub ipfs_api_url: Option<String>,
    pub ipfs_project_id: Option<String>,
    pub ipfs_project_secret: Option<String>,
    pub share_base_url: Option<String>,
    pub max_concurrent_fetches: Option<usize>,
    pub policy: Option<AssemblyPolicy>,
}

impl FileConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs_err::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// Settings given on the command line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Overrides {
    pub rpc_url: Option<String>,
    pub contract: Option<Address>,
    pub account: Option<Address>,
    pub ipfs_api_url: Option<String>,
    pub ipfs_project_id: Option<String>,
    pub ipfs_project_secret: Option<String>,
    pub max_concurrent_fetches: Option<usize>,
    pub policy: Option<AssemblyPolicy>,
}

/// The effective configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub rpc_url: String,
    pub contract: Option<Address>,
    pub account: Option<Address>,
    pub ipfs_api_url: String,
    /// Set only when both the project id and its secret are known.
    pub ipfs_credentials: Option<IpfsCredentials>,
    pub view: ViewOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            contract: None,
            account: None,
            ipfs_api_url: DEFAULT_IPFS_API_URL.to_string(),
            ipfs_credentials: None,
            view: ViewOptions::default(),
        }
    }
}

impl Config {
    /// Layers `file` and then `overrides` over the defaults.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Self {
        let defaults = Config::default();
        let view = ViewOptions {
            ipfs_gateway: file.ipfs_gateway.unwrap_or(defaults.view.ipfs_gateway),
            share_base_url: file.share_base_url.unwrap_or(defaults.view.share_base_url),
            max_concurrent_fetches: overrides
                .max_concurrent_fetches
                .or(file.max_concurrent_fetches)
                .unwrap_or(defaults.view.max_concurrent_fetches),
            policy: overrides
                .policy
                .or(file.policy)
                .unwrap_or(defaults.view.policy),
        };
        let ipfs_credentials = match (
            overrides.ipfs_project_id.or(file.ipfs_project_id),
            overrides.ipfs_project_secret.or(file.ipfs_project_secret),
        ) {
            (Some(project_id), Some(project_secret)) => Some(IpfsCredentials {
                project_id,
                project_secret,
            }),
            _ => None,
        };
        Self {
            rpc_url: overrides
                .rpc_url
                .or(file.rpc_url)
                .unwrap_or(defaults.rpc_url),
            contract: overrides.contract.or(file.contract),
            account: overrides.account.or(file.account),
            ipfs_api_url: overrides
                .ipfs_api_url
                .or(file.ipfs_api_url)
                .unwrap_or(defaults.ipfs_api_url),
            ipfs_credentials,
            view,
        }
    }

    /// Reads the file at `path`, if any, and applies `overrides`.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => FileConfig::read(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, overrides))
    }

    pub fn contract(&self) -> Result<Address, ConfigError> {
        self.contract.ok_or(ConfigError::MissingContract)
    }
}
