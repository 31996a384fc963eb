// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr, sync::Arc};

use festival_base::{catalog::DesignCatalog, metadata, share};
use festival_ledger::GreetingLedger;
use serde::{Deserialize, Serialize};

/// How the records of an id list are fetched.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssemblyPolicy {
    /// Look up the owner of each token before reading its fields.
    #[default]
    ExistenceChecked,
    /// Read the fields of each token directly.
    Direct,
}

impl fmt::Display for AssemblyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyPolicy::ExistenceChecked => f.write_str("existence-checked"),
            AssemblyPolicy::Direct => f.write_str("direct"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown assembly policy: {0}")]
pub struct UnknownPolicy(pub String);

impl FromStr for AssemblyPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "existence-checked" => Ok(AssemblyPolicy::ExistenceChecked),
            "direct" => Ok(AssemblyPolicy::Direct),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Settings of the greeting views.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Prefix prepended to IPFS content ids.
    pub ipfs_gateway: String,
    /// Origin of the greeting pages linked from share URLs.
    pub share_base_url: String,
    /// The maximum number of records fetched at the same time, per list.
    pub max_concurrent_fetches: usize,
    pub policy: AssemblyPolicy,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            ipfs_gateway: metadata::DEFAULT_IPFS_GATEWAY.to_string(),
            share_base_url: share::DEFAULT_SHARE_BASE_URL.to_string(),
            max_concurrent_fetches: 8,
            policy: AssemblyPolicy::default(),
        }
    }
}

/// Everything the greeting components need, built once at startup.
#[derive(Clone)]
pub struct GreetingsContext {
    pub ledger: Arc<dyn GreetingLedger>,
    pub catalog: &'static DesignCatalog,
    pub options: ViewOptions,
}

impl GreetingsContext {
    /// Creates a context over `ledger` using the built-in designs.
    pub fn new(ledger: Arc<dyn GreetingLedger>, options: ViewOptions) -> Self {
        Self {
            ledger,
            catalog: DesignCatalog::builtin(),
            options,
        }
    }
}

impl fmt::Debug for GreetingsContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreetingsContext")
            .field("catalog", &self.catalog.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
