// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Core data types for greeting drafts, ledger records and their display form.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    catalog,
    identifiers::{Address, TokenId},
};

/// The festival types offered by front-ends. The festival type itself is free text.
pub const FESTIVAL_TYPES: &[&str] = &[
    "Diwali",
    "Christmas",
    "Hanukkah",
    "Eid",
    "New Year",
    "Birthday",
    "Anniversary",
    "Thanksgiving",
    "Other",
];

/// A named SVG skeleton with `{{festival}}`, `{{message}}` and `{{date}}` placeholders.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct GreetingTemplate {
    pub id: u32,
    pub name: &'static str,
    pub svg_template: &'static str,
}

/// What a greeting's artwork refers to, as stored next to the record on the ledger.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DesignRef {
    /// One of the built-in designs.
    Catalog(u32),
    /// Custom artwork: inline SVG markup or a content address.
    Image(String),
}

impl DesignRef {
    /// Decodes the string form used on the ledger. Integers are catalog ids.
    pub fn from_wire(value: &str) -> Self {
        match value.trim().parse::<u32>() {
            Ok(id) => DesignRef::Catalog(id),
            Err(_) => DesignRef::Image(value.to_string()),
        }
    }

    /// Encodes this reference into the string form used on the ledger.
    pub fn to_wire(&self) -> String {
        match self {
            DesignRef::Catalog(id) => id.to_string(),
            DesignRef::Image(image) => image.clone(),
        }
    }
}

/// A greeting as stored on the ledger. Immutable once minted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GreetingRecord {
    pub token_id: TokenId,
    pub festival: String,
    pub message: String,
    /// Inline SVG markup, a data URI, or a content address.
    pub image_ref: String,
    pub sender: Address,
    pub design_ref: DesignRef,
}

/// Display-ready artwork for a greeting.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ImageSource {
    /// SVG markup to embed directly.
    InlineSvg(String),
    /// A URL (including `data:` URIs) to load the image from.
    Url(String),
}

impl ImageSource {
    pub fn as_str(&self) -> &str {
        match self {
            ImageSource::InlineSvg(markup) => markup,
            ImageSource::Url(url) => url,
        }
    }
}

/// A greeting assembled for display. Rebuilt on every fetch cycle.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GreetingViewModel {
    pub token_id: TokenId,
    pub festival: String,
    pub message: String,
    pub image: Option<ImageSource>,
    pub sender: Address,
    pub design_label: String,
}

/// The currency a payment amount is expressed in.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eth,
    Btc,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eth, Currency::Btc];
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Currency::Usd => "USD",
            Currency::Eth => "ETH",
            Currency::Btc => "BTC",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "ETH" => Ok(Currency::Eth),
            "BTC" => Ok(Currency::Btc),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

/// The artwork chosen for a new greeting.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ImageChoice {
    /// Render the selected catalog design.
    #[default]
    Design,
    /// An uploaded SVG; placeholders are substituted at mint time.
    CustomSvg(String),
    /// Artwork already pinned to IPFS, given as a content id or `ipfs://` URI.
    External(String),
}

/// The user input for a greeting that has not been minted yet.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DraftGreeting {
    pub recipient: String,
    pub festival_type: String,
    pub message: String,
    pub from_name: String,
    pub amount: String,
    pub currency: Currency,
    pub design_id: u32,
    pub image: ImageChoice,
}

impl Default for DraftGreeting {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            festival_type: String::new(),
            message: String::new(),
            from_name: String::new(),
            amount: String::new(),
            currency: Currency::default(),
            design_id: catalog::DesignCatalog::builtin().first().id,
            image: ImageChoice::default(),
        }
    }
}
