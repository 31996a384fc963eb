// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Identifiers assigned by the ledger.

use std::{fmt, str::FromStr};

pub use alloy_primitives::Address;
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// The ledger-assigned identifier of a minted greeting.
///
/// Ids may arrive as decimal strings, `0x`-prefixed hex strings or raw 256-bit
/// integers. All of them are normalized into this type, whose canonical textual form
/// is the decimal representation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TokenId(pub U256);

#[derive(Debug, thiserror::Error)]
#[error("invalid token id: {0:?}")]
pub struct InvalidTokenId(pub String);

impl TokenId {
    /// The raw 256-bit value.
    pub fn as_u256(&self) -> U256 {
        self.0
    }
}

impl From<u64> for TokenId {
    fn from(value: u64) -> Self {
        TokenId(U256::from(value))
    }
}

impl From<U256> for TokenId {
    fn from(value: U256) -> Self {
        TokenId(value)
    }
}

impl From<TokenId> for U256 {
    fn from(id: TokenId) -> Self {
        id.0
    }
}

impl From<TokenId> for String {
    fn from(id: TokenId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TokenId {
    type Error = InvalidTokenId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TokenId {
    type Err = InvalidTokenId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) if !hex.is_empty() => U256::from_str_radix(hex, 16),
            None if !trimmed.is_empty() => U256::from_str_radix(trimmed, 10),
            _ => return Err(InvalidTokenId(s.to_string())),
        };
        parsed
            .map(TokenId)
            .map_err(|_| InvalidTokenId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use test_case::test_case;

    use super::*;

    #[test_case("42"; "decimal")]
    #[test_case("0x2a"; "lower hex")]
    #[test_case("0X2A"; "upper hex")]
    #[test_case("  42 "; "surrounding whitespace")]
    fn test_token_id_normalization(input: &str) {
        let id: TokenId = input.parse().unwrap();
        assert_eq!(id, TokenId::from(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_invalid_token_ids() {
        assert_matches!("".parse::<TokenId>(), Err(InvalidTokenId(_)));
        assert_matches!("0x".parse::<TokenId>(), Err(InvalidTokenId(_)));
        assert_matches!("twelve".parse::<TokenId>(), Err(InvalidTokenId(_)));
        assert_matches!("-1".parse::<TokenId>(), Err(InvalidTokenId(_)));
    }

    #[test]
    fn test_token_id_serde_uses_decimal_strings() {
        let json = serde_json::to_string(&TokenId::from(255)).unwrap();
        assert_eq!(json, "\"255\"");
        let id: TokenId = serde_json::from_str("\"0xff\"").unwrap();
        assert_eq!(id, TokenId::from(255));
    }
}
