// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    rpc::types::eth::{TransactionInput, TransactionRequest},
    transports::RpcError,
};
use alloy_primitives::{Address, U256};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use festival_base::{data_types::GreetingRecord, ensure, identifiers::TokenId};
use tracing::{debug, info, instrument};
use url::Url;

use crate::{
    common::LedgerError,
    contract::{
        getGreetingFestivalCall, getGreetingImageCall, getGreetingMessageCall,
        getGreetingSenderCall, getReceivedGreetingsCall, getSentGreetingsCall, greeting_record,
        mintGreetingCardCall, minted_token_id, ownerOfCall, tokenURICall,
    },
    GreetingLedger, MintReceipt, MintRequest,
};

/// A client of the greetings contract deployed at `contract`, talking to an EVM node
/// over JSON-RPC.
pub struct EvmGreetingLedger {
    provider: Box<dyn Provider>,
    contract: Address,
    sender: Option<Address>,
}

impl EvmGreetingLedger {
    /// Connects to the node at `rpc_url` for reading only.
    pub fn new(rpc_url: &str, contract: Address) -> Result<Self, LedgerError> {
        let url = Url::parse(rpc_url)?;
        let provider = ProviderBuilder::new().connect_http(url);
        Ok(Self {
            provider: Box::new(provider),
            contract,
            sender: None,
        })
    }

    /// Connects to the node at `rpc_url`, signing transactions with `private_key`.
    pub fn with_signer(
        rpc_url: &str,
        contract: Address,
        private_key: &str,
    ) -> Result<Self, LedgerError> {
        let url = Url::parse(rpc_url)?;
        let signer = private_key.trim().parse::<PrivateKeySigner>()?;
        let sender = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url);
        Ok(Self {
            provider: Box::new(provider),
            contract,
            sender: Some(sender),
        })
    }

    /// The account transactions are sent from, if a signer is configured.
    pub fn sender(&self) -> Option<Address> {
        self.sender
    }

    pub fn contract(&self) -> Address {
        self.contract
    }

    /// Performs a non-executive call of the contract.
    async fn call<C: SolCall + Send>(&self, call: C) -> Result<C::Return, LedgerError> {
        let input = TransactionInput::new(call.abi_encode().into());
        let tx = TransactionRequest::default().to(self.contract).input(input);
        let output = self.provider.call(tx).await?;
        Ok(C::abi_decode_returns(&output)?)
    }

    /// Like [`Self::call`], for calls about one token: a revert means the token does
    /// not resolve.
    async fn call_for_token<C: SolCall + Send>(
        &self,
        id: TokenId,
        call: C,
    ) -> Result<C::Return, LedgerError> {
        self.call(call).await.map_err(|error| match error {
            LedgerError::Rpc(RpcError::ErrorResp(payload)) => {
                debug!("call for token {id} reverted: {payload}");
                LedgerError::NotFound(id)
            }
            error => error,
        })
    }
}

fn token_ids(ids: Vec<U256>) -> Vec<TokenId> {
    ids.into_iter().map(TokenId).collect()
}

#[async_trait]
impl GreetingLedger for EvmGreetingLedger {
    #[instrument(skip(self, request), fields(recipient = %request.recipient))]
    async fn mint(&self, request: MintRequest) -> Result<MintReceipt, LedgerError> {
        let sender = self.sender.ok_or(LedgerError::MissingSigner)?;
        let call = mintGreetingCardCall {
            recipient: request.recipient,
            message: request.message,
            festivalType: request.festival_type,
            imageURI: request.design_ref.to_wire(),
            isIpfsLink: request.is_external_image,
        };
        let mut tx = TransactionRequest::default()
            .from(sender)
            .to(self.contract)
            .input(TransactionInput::new(call.abi_encode().into()));
        if let Some(value) = request.value {
            tx = tx.value(value);
        }
        let receipt = self
            .provider
            .send_transaction(tx)
            .await?
            .get_receipt()
            .await?;
        let transaction_hash = receipt.transaction_hash.to_string();
        ensure!(receipt.status(), LedgerError::Reverted(transaction_hash));
        let token_id = minted_token_id(
            receipt.inner.logs().iter().map(|log| &log.inner),
            self.contract,
        );
        info!(%transaction_hash, ?token_id, "greeting minted");
        Ok(MintReceipt {
            transaction_hash,
            token_id,
        })
    }

    async fn ids_sent_by(&self, account: Address) -> Result<Vec<TokenId>, LedgerError> {
        let ids = self.call(getSentGreetingsCall { user: account }).await?;
        Ok(token_ids(ids))
    }

    async fn ids_received_by(&self, account: Address) -> Result<Vec<TokenId>, LedgerError> {
        let ids = self.call(getReceivedGreetingsCall { user: account }).await?;
        Ok(token_ids(ids))
    }

    async fn record(&self, id: TokenId) -> Result<GreetingRecord, LedgerError> {
        let token_id = id.as_u256();
        let festival = self
            .call_for_token(id, getGreetingFestivalCall { tokenId: token_id })
            .await?;
        let message = self
            .call_for_token(id, getGreetingMessageCall { tokenId: token_id })
            .await?;
        let image = self
            .call_for_token(id, getGreetingImageCall { tokenId: token_id })
            .await?;
        let sender = self
            .call_for_token(id, getGreetingSenderCall { tokenId: token_id })
            .await?;
        Ok(greeting_record(id, festival, message, image, sender))
    }

    async fn token_owner(&self, id: TokenId) -> Result<Address, LedgerError> {
        let owner = self
            .call_for_token(id, ownerOfCall { tokenId: id.as_u256() })
            .await?;
        ensure!(owner != Address::ZERO, LedgerError::NotFound(id));
        Ok(owner)
    }

    async fn token_metadata_uri(&self, id: TokenId) -> Result<Option<String>, LedgerError> {
        let uri = self
            .call_for_token(id, tokenURICall { tokenId: id.as_u256() })
            .await?;
        Ok(Some(uri).filter(|uri| !uri.is_empty()))
    }
}
