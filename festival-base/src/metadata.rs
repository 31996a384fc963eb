// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Resolution of stored image references and token metadata URIs.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use thiserror::Error;

use crate::data_types::ImageSource;

/// The public gateway used to load content-addressed images.
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

const IPFS_SCHEME: &str = "ipfs://";
const JSON_MEDIA_TYPE: &str = "application/json";
const SVG_MEDIA_TYPE: &str = "image/svg+xml";

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("malformed data URI")]
    MalformedDataUri,
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
    #[error("metadata is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Turns a stored image reference into something displayable.
///
/// Inline SVG markup is embedded, `data:` URIs and web URLs are used as they are, and
/// anything else is treated as an IPFS content id served through `gateway`.
pub fn resolve_image(image_ref: &str, gateway: &str) -> Option<ImageSource> {
    let trimmed = image_ref.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("<svg") {
        return Some(ImageSource::InlineSvg(trimmed.to_string()));
    }
    if trimmed.starts_with("data:")
        || trimmed.starts_with("https://")
        || trimmed.starts_with("http://")
    {
        return Some(ImageSource::Url(trimmed.to_string()));
    }
    let content_id = trimmed.strip_prefix(IPFS_SCHEME).unwrap_or(trimmed);
    Some(ImageSource::Url(format!("{gateway}{content_id}")))
}

#[derive(Deserialize)]
struct TokenMetadata {
    image: Option<String>,
}

/// Extracts the image of a token from its metadata URI.
///
/// JSON data URIs are decoded and their `image` field returned; SVG data URIs are the
/// image themselves. Other URIs would need a network fetch and yield `None`.
pub fn decode_token_uri(uri: &str) -> Result<Option<String>, MetadataError> {
    let Some(rest) = uri.trim().strip_prefix("data:") else {
        tracing::debug!("not resolving remote token metadata at {uri}");
        return Ok(None);
    };
    let (header, payload) = rest.split_once(',').ok_or(MetadataError::MalformedDataUri)?;
    let mut parameters = header.split(';');
    let media_type = parameters.next().unwrap_or_default();
    let is_base64 = parameters.any(|parameter| parameter == "base64");

    if media_type == SVG_MEDIA_TYPE {
        return Ok(Some(uri.trim().to_string()));
    }
    if media_type != JSON_MEDIA_TYPE {
        tracing::debug!("ignoring token metadata of type {media_type:?}");
        return Ok(None);
    }
    let json = if is_base64 {
        String::from_utf8(STANDARD.decode(payload)?)?
    } else {
        percent_decode_str(payload)
            .decode_utf8()
            .map_err(|_| MetadataError::MalformedDataUri)?
            .into_owned()
    };
    let metadata: TokenMetadata = serde_json::from_str(&json)?;
    Ok(metadata.image.filter(|image| !image.is_empty()))
}
