// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::{providers::PendingTransactionError, transports::TransportError};
use festival_base::identifiers::TokenId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The token does not exist, or no longer resolves.
    #[error("token {0} not found")]
    NotFound(TokenId),

    /// The ledger cannot be reached at all.
    #[error("the ledger is unavailable")]
    Unavailable,

    #[error("no signer is configured for sending transactions")]
    MissingSigner,

    #[error("transaction {0} reverted")]
    Reverted(String),

    /// RPC error
    #[error(transparent)]
    Rpc(#[from] TransportError),

    /// Waiting for a transaction receipt failed
    #[error(transparent)]
    Transaction(#[from] PendingTransactionError),

    /// ABI decoding error
    #[error(transparent)]
    Abi(#[from] alloy_sol_types::Error),

    /// URL parsing error
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),

    /// Private key parsing error
    #[error(transparent)]
    Signer(#[from] alloy_signer_local::LocalSignerError),

    #[error("ledger error: {0}")]
    Other(String),
}

impl LedgerError {
    /// Whether this error means the token does not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound(_))
    }
}
