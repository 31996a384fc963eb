// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use alloy_primitives::{Address, U256};
use assert_matches::assert_matches;
use festival_base::{data_types::DesignRef, identifiers::TokenId};
use festival_ledger::{test_utils::MemoryLedger, GreetingLedger, LedgerError, MintRequest};

fn mint_request(recipient: Address, design_ref: DesignRef, external: bool) -> MintRequest {
    MintRequest {
        recipient,
        message: "Happy Diwali".to_string(),
        festival_type: "Diwali".to_string(),
        design_ref,
        is_external_image: external,
        value: None,
    }
}

#[test_log::test(tokio::test)]
async fn test_mint_indexes_both_accounts() -> anyhow::Result<()> {
    let minter = Address::repeat_byte(1);
    let recipient = Address::repeat_byte(2);
    let ledger = MemoryLedger::new(minter);

    let receipt = ledger
        .mint(mint_request(recipient, DesignRef::Catalog(3), false))
        .await?;
    let id = receipt.token_id.expect("memory ledger reports token ids");
    assert_eq!(id, TokenId::from(1));
    assert!(receipt.transaction_hash.starts_with("0x"));

    assert_eq!(ledger.ids_sent_by(minter).await?, vec![id]);
    assert_eq!(ledger.ids_received_by(recipient).await?, vec![id]);
    assert_eq!(ledger.token_owner(id).await?, recipient);

    let record = ledger.record(id).await?;
    assert_eq!(record.festival, "Diwali");
    assert_eq!(record.sender, minter);
    assert_eq!(record.design_ref, DesignRef::Catalog(3));
    assert!(record.image_ref.is_empty());
    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_mint_with_external_image_stores_reference() -> anyhow::Result<()> {
    let ledger = MemoryLedger::new(Address::repeat_byte(1));
    let design_ref = DesignRef::Image("ipfs://bafybeigdyrzt".to_string());
    let mut request = mint_request(Address::repeat_byte(2), design_ref.clone(), true);
    request.value = Some(U256::from(10));

    let id = ledger.mint(request.clone()).await?.token_id.unwrap();
    let record = ledger.record(id).await?;
    assert_eq!(record.image_ref, "ipfs://bafybeigdyrzt");
    assert_eq!(record.design_ref, design_ref);
    assert_eq!(ledger.mint_requests(), vec![request]);
    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_failing_mint_is_recorded() {
    let ledger = MemoryLedger::new(Address::repeat_byte(1));
    ledger.set_failing_mints(true);
    let result = ledger
        .mint(mint_request(Address::repeat_byte(2), DesignRef::Catalog(1), false))
        .await;
    assert_matches!(result, Err(LedgerError::Reverted(_)));
    assert_eq!(ledger.mint_requests().len(), 1);
    assert!(ledger.ids_sent_by(Address::repeat_byte(1)).await.unwrap().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_unknown_and_burned_tokens() {
    let sender = Address::repeat_byte(1);
    let ledger = MemoryLedger::new(sender);
    let id = ledger.add_greeting(
        sender,
        Address::repeat_byte(2),
        "Eid",
        "Eid Mubarak",
        DesignRef::Catalog(5),
    );
    ledger.burn(id);

    assert_matches!(ledger.record(id).await, Err(LedgerError::NotFound(missing)) if missing == id);
    assert!(ledger.token_owner(TokenId::from(99)).await.unwrap_err().is_not_found());
    // The id lists still mention the burned token.
    assert_eq!(ledger.ids_sent_by(sender).await.unwrap(), vec![id]);
}

#[test_log::test(tokio::test)]
async fn test_injected_failures() {
    let sender = Address::repeat_byte(1);
    let ledger = MemoryLedger::new(sender);
    let id = ledger.add_greeting(
        sender,
        Address::repeat_byte(2),
        "Christmas",
        "Merry Christmas",
        DesignRef::Catalog(2),
    );

    ledger.fail_reads_of(id);
    assert_matches!(ledger.record(id).await, Err(LedgerError::Other(_)));

    ledger.set_unavailable(true);
    assert_matches!(ledger.ids_sent_by(sender).await, Err(LedgerError::Unavailable));
    assert_matches!(ledger.token_metadata_uri(id).await, Err(LedgerError::Unavailable));
    assert_eq!(ledger.record_reads(), 0);
}

#[test_log::test(tokio::test)]
async fn test_metadata_uri() -> anyhow::Result<()> {
    let sender = Address::repeat_byte(1);
    let ledger = MemoryLedger::new(sender);
    let id = ledger.add_greeting(sender, sender, "Other", "Hi", DesignRef::Catalog(1));
    assert_eq!(ledger.token_metadata_uri(id).await?, None);
    ledger.set_metadata_uri(id, "data:application/json;base64,e30=");
    assert_eq!(
        ledger.token_metadata_uri(id).await?.as_deref(),
        Some("data:application/json;base64,e30=")
    );
    Ok(())
}
