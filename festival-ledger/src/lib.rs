// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This module provides access to the festival greetings contract: minting greetings and
//! reading the ids and records of the greetings an account sent or received. Artwork
//! minted as an external image is uploaded through [`ipfs`].

pub mod client;
pub mod common;
pub mod contract;
pub mod ipfs;

/// Helper types for tests.
#[cfg(with_testing)]
pub mod test_utils;

use alloy_primitives::U256;
use async_trait::async_trait;
use festival_base::{
    data_types::{DesignRef, GreetingRecord},
    identifiers::{Address, TokenId},
};
use serde::{Deserialize, Serialize};

pub use crate::common::LedgerError;

/// The arguments of a mint operation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MintRequest {
    pub recipient: Address,
    pub message: String,
    pub festival_type: String,
    pub design_ref: DesignRef,
    /// Whether `design_ref` points to artwork hosted outside the ledger.
    pub is_external_image: bool,
    /// The native-token amount sent along with the mint, in wei.
    pub value: Option<U256>,
}

/// The outcome of a successful mint.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MintReceipt {
    pub transaction_hash: String,
    /// The id of the new token, when the ledger reported it.
    pub token_id: Option<TokenId>,
}

/// The operations of the greetings contract used by the client.
#[async_trait]
pub trait GreetingLedger: Send + Sync {
    /// Mints a new greeting for `request.recipient`.
    async fn mint(&self, request: MintRequest) -> Result<MintReceipt, LedgerError>;

    /// The ids of the greetings sent by `account`. May contain duplicates.
    async fn ids_sent_by(&self, account: Address) -> Result<Vec<TokenId>, LedgerError>;

    /// The ids of the greetings received by `account`. May contain duplicates.
    async fn ids_received_by(&self, account: Address) -> Result<Vec<TokenId>, LedgerError>;

    /// Reads the fields of the greeting `id`.
    async fn record(&self, id: TokenId) -> Result<GreetingRecord, LedgerError>;

    /// The current owner of `id`. Fails with [`LedgerError::NotFound`] for unknown tokens.
    async fn token_owner(&self, id: TokenId) -> Result<Address, LedgerError>;

    /// The metadata URI of `id`, if it has one.
    async fn token_metadata_uri(&self, id: TokenId) -> Result<Option<String>, LedgerError>;
}
