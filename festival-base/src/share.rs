// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Social-media deep links for sharing a greeting.

use std::{fmt, str::FromStr};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::identifiers::TokenId;

/// The site hosting greeting pages.
pub const DEFAULT_SHARE_BASE_URL: &str = "https://festivalgreetings.com";

/// Messages longer than this many characters are cut in share texts.
pub const MAX_SHARED_MESSAGE_CHARS: usize = 50;

/// Everything except the characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Twitter,
    Facebook,
    Linkedin,
    Email,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 4] = [
        SharePlatform::Twitter,
        SharePlatform::Facebook,
        SharePlatform::Linkedin,
        SharePlatform::Email,
    ];
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SharePlatform::Twitter => "twitter",
            SharePlatform::Facebook => "facebook",
            SharePlatform::Linkedin => "linkedin",
            SharePlatform::Email => "email",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown share platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for SharePlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" => Ok(SharePlatform::Twitter),
            "facebook" => Ok(SharePlatform::Facebook),
            "linkedin" => Ok(SharePlatform::Linkedin),
            "email" => Ok(SharePlatform::Email),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

/// What gets shared about a greeting.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareContext {
    pub festival: String,
    pub message: String,
    /// The page showing the greeting.
    pub page_url: String,
}

impl ShareContext {
    pub fn new(festival: &str, message: &str, base_url: &str, token_id: TokenId) -> Self {
        Self {
            festival: festival.to_string(),
            message: message.to_string(),
            page_url: greeting_page_url(base_url, token_id),
        }
    }
}

/// The URL of the page showing the greeting `token_id`.
pub fn greeting_page_url(base_url: &str, token_id: TokenId) -> String {
    format!("{}/share/{token_id}", base_url.trim_end_matches('/'))
}

/// Cuts `message` to [`MAX_SHARED_MESSAGE_CHARS`] characters, appending `...` if it
/// was longer.
pub fn truncate_message(message: &str) -> String {
    let mut chars = message.chars();
    let head = chars
        .by_ref()
        .take(MAX_SHARED_MESSAGE_CHARS)
        .collect::<String>();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// The text posted along with a shared greeting.
pub fn share_text(context: &ShareContext) -> String {
    format!(
        "Check out my {} greeting: \"{}\"",
        context.festival,
        truncate_message(&context.message)
    )
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, URI_COMPONENT).to_string()
}

/// Builds the deep link sharing a greeting on `platform`.
pub fn build_share_url(platform: SharePlatform, context: &ShareContext) -> String {
    let text = share_text(context);
    let page_url = encode(&context.page_url);
    match platform {
        SharePlatform::Twitter => format!(
            "https://twitter.com/intent/tweet?text={}&url={page_url}",
            encode(&text)
        ),
        SharePlatform::Facebook => format!(
            "https://www.facebook.com/sharer/sharer.php?u={page_url}&quote={}",
            encode(&text)
        ),
        SharePlatform::Linkedin => {
            format!("https://www.linkedin.com/sharing/share-offsite/?url={page_url}")
        }
        SharePlatform::Email => format!(
            "mailto:?subject={}&body={}",
            encode(&format!("{} Greeting for you", context.festival)),
            encode(&format!("{text}\n\nView it here: {}", context.page_url))
        ),
    }
}

/// Like [`build_share_url`], for a platform given by name. Unknown platforms yield an
/// empty string.
pub fn build_share_url_for(platform: &str, context: &ShareContext) -> String {
    match platform.parse() {
        Ok(platform) => build_share_url(platform, context),
        Err(UnknownPlatform(name)) => {
            tracing::debug!("cannot share on unknown platform {name:?}");
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "unit_tests/share_tests.rs"]
mod share_tests;
