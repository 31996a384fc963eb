// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The form used to compose and mint a new greeting.

use alloy_primitives::{utils::parse_ether, U256};
use festival_base::{
    catalog::{CatalogError, DesignCatalog},
    data_types::{Currency, DesignRef, DraftGreeting, ImageChoice, ImageSource},
    ensure,
    identifiers::Address,
    metadata,
    template::{self, TemplateValues},
};
use festival_ledger::{LedgerError, MintReceipt, MintRequest};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::context::GreetingsContext;

/// Festival shown in previews while none is entered.
pub const PREVIEW_FESTIVAL: &str = "Other";
/// Message shown in previews while none is entered.
pub const PREVIEW_MESSAGE: &str = "Your greeting message will appear here...";
/// Sender shown in previews without a name or a connected account.
pub const PREVIEW_SENDER: &str = "Your Name";

/// A problem with the user input. Nothing was sent to the ledger.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("the {0} is required")]
    MissingField(&'static str),
    #[error("connect a wallet to send greetings")]
    NotConnected,
    #[error("invalid recipient address {0:?}")]
    InvalidRecipient(String),
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
    #[error(transparent)]
    UnknownDesign(#[from] CatalogError),
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The mint was attempted and failed. The draft is kept for a manual retry.
    #[error("minting failed: {0}")]
    Operation(#[from] LedgerError),
}

/// A short message reporting the outcome of a user action.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn minted() -> Self {
        Self::new("Greeting created!", "Your greeting has been minted as an NFT.")
    }
}

impl FormError {
    /// The notice shown to the user for this error.
    pub fn notice(&self) -> Notice {
        match self {
            FormError::Validation(ValidationError::MissingField(_)) => {
                Notice::new("Missing fields", "Please fill in all required fields.")
            }
            FormError::Validation(ValidationError::NotConnected) => {
                Notice::new("Wallet not connected", "Please connect your wallet.")
            }
            FormError::Validation(error) => Notice::new("Invalid greeting", &error.to_string()),
            FormError::Operation(_) => Notice::new(
                "Minting failed",
                "There was an error minting your greeting.",
            ),
        }
    }
}

/// A successful submission.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Submission {
    pub receipt: MintReceipt,
    pub notice: Notice,
}

/// Checks the draft and returns the parsed recipient.
pub fn validate(draft: &DraftGreeting, sender: Option<Address>) -> Result<Address, ValidationError> {
    let recipient = draft.recipient.trim();
    ensure!(!recipient.is_empty(), ValidationError::MissingField("recipient"));
    ensure!(
        !draft.festival_type.trim().is_empty(),
        ValidationError::MissingField("festival type")
    );
    ensure!(
        !draft.message.trim().is_empty(),
        ValidationError::MissingField("message")
    );
    ensure!(sender.is_some(), ValidationError::NotConnected);
    let recipient = recipient
        .parse::<Address>()
        .map_err(|_| ValidationError::InvalidRecipient(draft.recipient.clone()))?;
    parse_amount(&draft.amount, draft.currency)?;
    Ok(recipient)
}

/// Ether amounts cannot be finer than one wei.
const ETHER_DECIMALS: usize = 18;

/// Parses the optional payment of a draft. Only ether amounts are sent along with the
/// mint, converted to wei.
pub fn parse_amount(amount: &str, currency: Currency) -> Result<Option<U256>, ValidationError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Ok(None);
    }
    let invalid = || ValidationError::InvalidAmount(amount.to_string());
    let mut parts = amount.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    ensure!(
        !(whole.is_empty() && fraction.is_empty())
            && whole.chars().all(|c| c.is_ascii_digit())
            && fraction.chars().all(|c| c.is_ascii_digit()),
        invalid()
    );
    match currency {
        Currency::Eth => {
            ensure!(fraction.len() <= ETHER_DECIMALS, invalid());
            let wei = parse_ether(amount).map_err(|_| invalid())?;
            Ok(Some(wei).filter(|wei| !wei.is_zero()))
        }
        Currency::Usd | Currency::Btc => Ok(None),
    }
}

/// Holds the draft being edited and submits it to the ledger.
#[derive(Debug)]
pub struct FormController {
    context: GreetingsContext,
    sender: Option<Address>,
    draft: DraftGreeting,
}

impl FormController {
    pub fn new(context: GreetingsContext, sender: Option<Address>) -> Self {
        Self {
            context,
            sender,
            draft: DraftGreeting::default(),
        }
    }

    pub fn draft(&self) -> &DraftGreeting {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftGreeting {
        &mut self.draft
    }

    /// The connected account, if any.
    pub fn sender(&self) -> Option<Address> {
        self.sender
    }

    pub fn set_sender(&mut self, sender: Option<Address>) {
        self.sender = sender;
    }

    /// Clears every field. The design goes back to the first one of the catalog.
    pub fn reset(&mut self) {
        self.draft = DraftGreeting {
            design_id: self.context.catalog.first().id,
            ..DraftGreeting::default()
        };
    }

    /// Validates the draft and builds the mint it stands for.
    pub fn mint_request(&self) -> Result<MintRequest, ValidationError> {
        let draft = &self.draft;
        let recipient = validate(draft, self.sender)?;
        let (design_ref, is_external_image) = design_ref(self.context.catalog, draft)?;
        Ok(MintRequest {
            recipient,
            message: draft.message.trim().to_string(),
            festival_type: draft.festival_type.trim().to_string(),
            design_ref,
            is_external_image,
            value: parse_amount(&draft.amount, draft.currency)?,
        })
    }

    /// Mints the draft. On success the draft is reset; on failure it is left untouched.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Submission, FormError> {
        let request = self.mint_request()?;
        match self.context.ledger.mint(request).await {
            Ok(receipt) => {
                info!(transaction_hash = %receipt.transaction_hash, "greeting submitted");
                self.reset();
                Ok(Submission {
                    receipt,
                    notice: Notice::minted(),
                })
            }
            Err(error) => {
                warn!("Failed to mint greeting: {error}");
                Err(error.into())
            }
        }
    }

    /// The sender signing the preview: the entered name, else the connected account.
    pub fn preview_sender(&self) -> String {
        match (self.draft.from_name.trim(), self.sender) {
            ("", Some(sender)) => sender.to_string(),
            ("", None) => PREVIEW_SENDER.to_string(),
            (name, _) => name.to_string(),
        }
    }

    /// Renders the artwork of the draft with `date`, using sample text for empty fields.
    pub fn preview(&self, date: &str) -> Option<ImageSource> {
        let draft = &self.draft;
        let values = TemplateValues::new(
            non_empty_or(&draft.festival_type, PREVIEW_FESTIVAL),
            non_empty_or(&draft.message, PREVIEW_MESSAGE),
            date,
        );
        match &draft.image {
            ImageChoice::Design => {
                let design = self.context.catalog.get(draft.design_id).ok()?;
                Some(ImageSource::InlineSvg(template::render_preview(
                    design, &values,
                )))
            }
            ImageChoice::CustomSvg(svg) => {
                Some(ImageSource::InlineSvg(template::render(svg, &values)))
            }
            ImageChoice::External(content_id) => {
                metadata::resolve_image(content_id, &self.context.options.ipfs_gateway)
            }
        }
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// The design reference minted for a draft, and whether it points outside the ledger.
fn design_ref(
    catalog: &DesignCatalog,
    draft: &DraftGreeting,
) -> Result<(DesignRef, bool), ValidationError> {
    match &draft.image {
        ImageChoice::Design => {
            let design = catalog.get(draft.design_id)?;
            Ok((DesignRef::Catalog(design.id), false))
        }
        ImageChoice::CustomSvg(svg) => {
            ensure!(!svg.trim().is_empty(), ValidationError::MissingField("image"));
            let values = TemplateValues {
                festival: Some(draft.festival_type.trim()),
                message: Some(draft.message.trim()),
                date: None,
            };
            Ok((DesignRef::Image(template::render(svg, &values)), false))
        }
        ImageChoice::External(content_id) => {
            let content_id = content_id.trim();
            let content_id = content_id.strip_prefix("ipfs://").unwrap_or(content_id);
            ensure!(!content_id.is_empty(), ValidationError::MissingField("image"));
            Ok((DesignRef::Image(format!("ipfs://{content_id}")), true))
        }
    }
}

#[cfg(test)]
#[path = "unit_tests/form_tests.rs"]
mod form_tests;
