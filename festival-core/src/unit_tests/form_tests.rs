// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use assert_matches::assert_matches;
use festival_ledger::test_utils::MemoryLedger;
use test_case::test_case;

use super::*;
use crate::context::ViewOptions;

const RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

fn controller() -> (Arc<MemoryLedger>, FormController) {
    let sender = Address::repeat_byte(1);
    let ledger = Arc::new(MemoryLedger::new(sender));
    let context = GreetingsContext::new(ledger.clone(), ViewOptions::default());
    (ledger, FormController::new(context, Some(sender)))
}

fn fill(controller: &mut FormController) {
    let draft = controller.draft_mut();
    draft.recipient = RECIPIENT.to_string();
    draft.festival_type = "Diwali".to_string();
    draft.message = "Happy Diwali!".to_string();
    draft.from_name = "Asha".to_string();
    draft.design_id = 3;
}

#[test_case(""; "empty")]
#[test_case("   "; "blank")]
#[test_log::test(tokio::test)]
async fn test_missing_recipient_does_not_mint(recipient: &str) {
    let (ledger, mut controller) = controller();
    fill(&mut controller);
    controller.draft_mut().recipient = recipient.to_string();

    let error = controller.submit().await.unwrap_err();
    assert_matches!(
        error,
        FormError::Validation(ValidationError::MissingField("recipient"))
    );
    assert_eq!(error.notice().title, "Missing fields");
    assert!(ledger.mint_requests().is_empty());
    assert_eq!(controller.draft().recipient, recipient);
}

#[test_log::test(tokio::test)]
async fn test_missing_message_and_festival() {
    let (ledger, mut controller) = controller();
    fill(&mut controller);
    controller.draft_mut().festival_type.clear();
    assert_matches!(
        controller.submit().await,
        Err(FormError::Validation(ValidationError::MissingField("festival type")))
    );
    fill(&mut controller);
    controller.draft_mut().message = " ".to_string();
    assert_matches!(
        controller.submit().await,
        Err(FormError::Validation(ValidationError::MissingField("message")))
    );
    assert!(ledger.mint_requests().is_empty());
}

#[test_log::test(tokio::test)]
async fn test_successful_submit_resets_draft() {
    let (ledger, mut controller) = controller();
    fill(&mut controller);
    controller.draft_mut().amount = "12.50".to_string();
    controller.draft_mut().currency = Currency::Btc;

    let submission = controller.submit().await.unwrap();
    assert_eq!(submission.notice, Notice::minted());
    assert!(submission.receipt.token_id.is_some());

    let requests = ledger.mint_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.recipient, RECIPIENT.parse::<Address>().unwrap());
    assert_eq!(request.festival_type, "Diwali");
    assert_eq!(request.message, "Happy Diwali!");
    assert_eq!(request.design_ref, DesignRef::Catalog(3));
    assert!(!request.is_external_image);
    assert_eq!(request.value, None);

    assert_eq!(controller.draft(), &DraftGreeting::default());
    assert_eq!(controller.draft().design_id, 1);
    assert_eq!(controller.draft().currency, Currency::Usd);
}

#[test_log::test(tokio::test)]
async fn test_failed_submit_keeps_draft() {
    let (ledger, mut controller) = controller();
    ledger.set_failing_mints(true);
    fill(&mut controller);
    let draft = controller.draft().clone();

    let error = controller.submit().await.unwrap_err();
    assert_matches!(error, FormError::Operation(LedgerError::Reverted(_)));
    assert_eq!(error.notice().title, "Minting failed");
    assert_eq!(controller.draft(), &draft);
    assert_eq!(ledger.mint_requests().len(), 1);
}

#[test_log::test(tokio::test)]
async fn test_disconnected_sender() {
    let (ledger, mut controller) = controller();
    controller.set_sender(None);
    fill(&mut controller);
    assert_matches!(
        controller.submit().await,
        Err(FormError::Validation(ValidationError::NotConnected))
    );
    assert!(ledger.mint_requests().is_empty());
}

#[test]
fn test_invalid_recipient_and_design() {
    let (_, mut controller) = controller();
    fill(&mut controller);
    controller.draft_mut().recipient = "alice.eth".to_string();
    assert_matches!(
        controller.mint_request(),
        Err(ValidationError::InvalidRecipient(_))
    );
    fill(&mut controller);
    controller.draft_mut().design_id = 42;
    assert_matches!(
        controller.mint_request(),
        Err(ValidationError::UnknownDesign(CatalogError::NotFound(42)))
    );
}

#[test_case("", Currency::Eth, None; "empty amount")]
#[test_case("0.5", Currency::Eth, Some(U256::from(500_000_000_000_000_000u64)); "ether")]
#[test_case("2", Currency::Eth, Some(U256::from(2_000_000_000_000_000_000u64)); "whole ether")]
#[test_case("0", Currency::Eth, None; "zero ether")]
#[test_case("15.25", Currency::Usd, None; "dollars are not sent")]
fn test_parse_amount(amount: &str, currency: Currency, expected: Option<U256>) {
    assert_eq!(parse_amount(amount, currency).unwrap(), expected);
}

#[test_case("abc"; "letters")]
#[test_case("-1"; "negative")]
#[test_case("1.2.3"; "two points")]
#[test_case("."; "lone point")]
fn test_invalid_amount(amount: &str) {
    assert_matches!(
        parse_amount(amount, Currency::Usd),
        Err(ValidationError::InvalidAmount(_))
    );
}

#[test_case("0.0000000000000000001"; "finer than a wei")]
#[test_case("1.1234567890123456789"; "nineteen decimals")]
fn test_invalid_ether_amount(amount: &str) {
    assert_matches!(
        parse_amount(amount, Currency::Eth),
        Err(ValidationError::InvalidAmount(_))
    );
}

#[test]
fn test_smallest_ether_amount() {
    assert_eq!(
        parse_amount("0.000000000000000001", Currency::Eth).unwrap(),
        Some(U256::from(1))
    );
}

#[test]
fn test_image_choices() {
    let (_, mut controller) = controller();
    fill(&mut controller);
    controller.draft_mut().image =
        ImageChoice::CustomSvg("<svg>{{festival}}: {{message}}</svg>".to_string());
    let request = controller.mint_request().unwrap();
    assert_eq!(
        request.design_ref,
        DesignRef::Image("<svg>Diwali: Happy Diwali!</svg>".to_string())
    );
    assert!(!request.is_external_image);

    controller.draft_mut().image = ImageChoice::External("bafybeigdyrzt".to_string());
    let request = controller.mint_request().unwrap();
    assert_eq!(request.design_ref, DesignRef::Image("ipfs://bafybeigdyrzt".to_string()));
    assert!(request.is_external_image);

    controller.draft_mut().image = ImageChoice::External("ipfs://".to_string());
    assert_matches!(
        controller.mint_request(),
        Err(ValidationError::MissingField("image"))
    );
}

#[test]
fn test_preview_uses_sample_text() {
    let (_, mut controller) = controller();
    let preview = controller.preview("2025-05-23").unwrap();
    let svg = preview.as_str();
    assert!(svg.contains(PREVIEW_FESTIVAL));
    assert!(svg.contains(PREVIEW_MESSAGE));
    assert!(svg.contains(r#"width="320""#));

    fill(&mut controller);
    let preview = controller.preview("2025-05-23").unwrap();
    assert!(preview.as_str().contains("Happy Diwali!"));

    controller.draft_mut().image = ImageChoice::External("bafy".to_string());
    assert_eq!(
        controller.preview("2025-05-23"),
        Some(ImageSource::Url("https://ipfs.io/ipfs/bafy".to_string()))
    );
}

#[test]
fn test_preview_sender() {
    let (_, mut controller) = controller();
    let sender = controller.sender().unwrap();
    assert_eq!(controller.preview_sender(), sender.to_string());

    controller.draft_mut().from_name = "  Asha ".to_string();
    assert_eq!(controller.preview_sender(), "Asha");

    controller.draft_mut().from_name.clear();
    controller.set_sender(None);
    assert_eq!(controller.preview_sender(), PREVIEW_SENDER);
}
