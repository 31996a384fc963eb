// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Mutex,
};

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use festival_base::{
    data_types::{DesignRef, GreetingRecord},
    identifiers::TokenId,
};

use crate::{
    common::LedgerError, contract::greeting_record, GreetingLedger, MintReceipt, MintRequest,
};

/// A greeting held by the [`MemoryLedger`], stored the way the contract stores it.
#[derive(Clone, Debug)]
struct StoredGreeting {
    owner: Address,
    sender: Address,
    festival: String,
    message: String,
    image: String,
    metadata_uri: Option<String>,
}

#[derive(Debug, Default)]
struct State {
    next_id: u64,
    greetings: BTreeMap<TokenId, StoredGreeting>,
    sent: BTreeMap<Address, Vec<TokenId>>,
    received: BTreeMap<Address, Vec<TokenId>>,
    failing_reads: BTreeSet<TokenId>,
    unavailable: bool,
    failing_mints: bool,
    mints: Vec<MintRequest>,
    record_reads: usize,
    owner_reads: usize,
}

/// An in-memory greetings ledger with switches to inject failures.
#[derive(Debug)]
pub struct MemoryLedger {
    minter: Address,
    state: Mutex<State>,
}

impl MemoryLedger {
    /// Creates an empty ledger on which `minter` signs mint transactions.
    pub fn new(minter: Address) -> Self {
        Self {
            minter,
            state: Mutex::new(State {
                next_id: 1,
                ..State::default()
            }),
        }
    }

    pub fn minter(&self) -> Address {
        self.minter
    }

    /// Stores a greeting from `sender` to `recipient` and indexes it in both accounts'
    /// lists, returning its id.
    pub fn add_greeting(
        &self,
        sender: Address,
        recipient: Address,
        festival: &str,
        message: &str,
        design_ref: DesignRef,
    ) -> TokenId {
        let mut state = self.state.lock().unwrap();
        let id = TokenId::from(state.next_id);
        state.next_id += 1;
        state.greetings.insert(
            id,
            StoredGreeting {
                owner: recipient,
                sender,
                festival: festival.to_string(),
                message: message.to_string(),
                image: design_ref.to_wire(),
                metadata_uri: None,
            },
        );
        state.sent.entry(sender).or_default().push(id);
        state.received.entry(recipient).or_default().push(id);
        id
    }

    /// Appends `id` to the sent list of `account` without storing anything.
    pub fn push_sent(&self, account: Address, id: TokenId) {
        let mut state = self.state.lock().unwrap();
        state.sent.entry(account).or_default().push(id);
    }

    /// Appends `id` to the received list of `account` without storing anything.
    pub fn push_received(&self, account: Address, id: TokenId) {
        let mut state = self.state.lock().unwrap();
        state.received.entry(account).or_default().push(id);
    }

    /// Removes the greeting `id` while leaving it in the id lists.
    pub fn burn(&self, id: TokenId) {
        self.state.lock().unwrap().greetings.remove(&id);
    }

    pub fn set_metadata_uri(&self, id: TokenId, uri: &str) {
        let mut state = self.state.lock().unwrap();
        if let Some(greeting) = state.greetings.get_mut(&id) {
            greeting.metadata_uri = Some(uri.to_string());
        }
    }

    /// Makes every per-token read of `id` fail.
    pub fn fail_reads_of(&self, id: TokenId) {
        self.state.lock().unwrap().failing_reads.insert(id);
    }

    /// Makes every operation fail with [`LedgerError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state.lock().unwrap().unavailable = unavailable;
    }

    pub fn set_failing_mints(&self, failing: bool) {
        self.state.lock().unwrap().failing_mints = failing;
    }

    /// The mint requests received so far, including failed ones.
    pub fn mint_requests(&self) -> Vec<MintRequest> {
        self.state.lock().unwrap().mints.clone()
    }

    pub fn record_reads(&self) -> usize {
        self.state.lock().unwrap().record_reads
    }

    pub fn owner_reads(&self) -> usize {
        self.state.lock().unwrap().owner_reads
    }

    fn read_token<T>(
        &self,
        id: TokenId,
        read: impl FnOnce(&mut State, &StoredGreeting) -> T,
    ) -> Result<T, LedgerError> {
        let mut state = self.state.lock().unwrap();
        if state.unavailable {
            return Err(LedgerError::Unavailable);
        }
        if state.failing_reads.contains(&id) {
            return Err(LedgerError::Other(format!("injected failure for token {id}")));
        }
        let greeting = state
            .greetings
            .get(&id)
            .cloned()
            .ok_or(LedgerError::NotFound(id))?;
        Ok(read(&mut *state, &greeting))
    }

    fn read_list(
        &self,
        account: Address,
        list: impl FnOnce(&State) -> &BTreeMap<Address, Vec<TokenId>>,
    ) -> Result<Vec<TokenId>, LedgerError> {
        let state = self.state.lock().unwrap();
        if state.unavailable {
            return Err(LedgerError::Unavailable);
        }
        Ok(list(&*state).get(&account).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl GreetingLedger for MemoryLedger {
    async fn mint(&self, request: MintRequest) -> Result<MintReceipt, LedgerError> {
        let (unavailable, failing) = {
            let mut state = self.state.lock().unwrap();
            state.mints.push(request.clone());
            (state.unavailable, state.failing_mints)
        };
        if unavailable {
            return Err(LedgerError::Unavailable);
        }
        if failing {
            return Err(LedgerError::Reverted("0xdeadbeef".to_string()));
        }
        let id = self.add_greeting(
            self.minter,
            request.recipient,
            &request.festival_type,
            &request.message,
            request.design_ref,
        );
        Ok(MintReceipt {
            transaction_hash: B256::from(id.as_u256().to_be_bytes::<32>()).to_string(),
            token_id: Some(id),
        })
    }

    async fn ids_sent_by(&self, account: Address) -> Result<Vec<TokenId>, LedgerError> {
        self.read_list(account, |state| &state.sent)
    }

    async fn ids_received_by(&self, account: Address) -> Result<Vec<TokenId>, LedgerError> {
        self.read_list(account, |state| &state.received)
    }

    async fn record(&self, id: TokenId) -> Result<GreetingRecord, LedgerError> {
        self.read_token(id, |state, greeting| {
            state.record_reads += 1;
            greeting_record(
                id,
                greeting.festival.clone(),
                greeting.message.clone(),
                greeting.image.clone(),
                greeting.sender,
            )
        })
    }

    async fn token_owner(&self, id: TokenId) -> Result<Address, LedgerError> {
        self.read_token(id, |state, greeting| {
            state.owner_reads += 1;
            greeting.owner
        })
    }

    async fn token_metadata_uri(&self, id: TokenId) -> Result<Option<String>, LedgerError> {
        self.read_token(id, |_, greeting| greeting.metadata_uri.clone())
    }
}
