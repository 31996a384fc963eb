// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Uploads of greeting artwork to an IPFS HTTP API.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// The API used when none is configured.
pub const DEFAULT_IPFS_API_URL: &str = "https://ipfs.infura.io:5001/api/v0";

#[derive(Debug, Error)]
pub enum IpfsError {
    /// HTTP error
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// URL parsing error
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),

    #[error("the IPFS API answered {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("the IPFS API returned an empty content id")]
    MissingHash,
}

/// The project credentials sent as HTTP basic authentication.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IpfsCredentials {
    pub project_id: String,
    pub project_secret: String,
}

/// The part of the `add` answer that is used.
#[derive(Debug, Deserialize)]
struct AddResponse {
    #[serde(rename = "Hash")]
    hash: String,
}

/// A client of the `add` endpoint of an IPFS HTTP API.
#[derive(Clone, Debug)]
pub struct IpfsUploader {
    client: reqwest::Client,
    add_url: url::Url,
    credentials: Option<IpfsCredentials>,
}

impl IpfsUploader {
    /// Creates an uploader for the API rooted at `api_url`, e.g. `http://127.0.0.1:5001/api/v0`.
    pub fn new(api_url: &str, credentials: Option<IpfsCredentials>) -> Result<Self, IpfsError> {
        let add_url = url::Url::parse(&format!("{}/add", api_url.trim_end_matches('/')))?;
        let client = reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            client,
            add_url,
            credentials,
        })
    }

    /// Adds `content` under `file_name` and returns its content id.
    #[instrument(level = "debug", skip(self, content), fields(size = content.len()))]
    pub async fn add(&self, file_name: &str, content: Vec<u8>) -> Result<String, IpfsError> {
        let part = reqwest::multipart::Part::bytes(content).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let mut request = self.client.post(self.add_url.clone()).multipart(form);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(
                &credentials.project_id,
                Some(&credentials.project_secret),
            );
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|error| format!("could not get response text: {error}"));
            return Err(IpfsError::Rejected { status, body });
        }
        let added: AddResponse = response.json().await?;
        let hash = added.hash.trim();
        if hash.is_empty() {
            return Err(IpfsError::MissingHash);
        }
        debug!("added {file_name} as {hash}");
        Ok(hash.to_string())
    }
}
