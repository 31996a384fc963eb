// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::net::SocketAddr;

use assert_matches::assert_matches;
use axum::{
    body::Bytes,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use festival_ledger::ipfs::{IpfsCredentials, IpfsError, IpfsUploader};

const ARTWORK: &[u8] = b"<svg>lanterns</svg>";

async fn add(headers: HeaderMap, body: Bytes) -> Response {
    let authorized = headers
        .get(AUTHORIZATION)
        .is_some_and(|value| value == "Basic cHJvamVjdDpzZWNyZXQ=");
    if !authorized {
        return (StatusCode::UNAUTHORIZED, "invalid project id").into_response();
    }
    let body = String::from_utf8_lossy(&body);
    if !body.contains("lanterns") || !body.contains(r#"filename="card.svg""#) {
        return (StatusCode::BAD_REQUEST, "no file").into_response();
    }
    Json(serde_json::json!({ "Name": "card.svg", "Hash": "bafylanterns", "Size": "19" }))
        .into_response()
}

/// Serves a fake `add` endpoint under `/api/v0`.
async fn start_api() -> anyhow::Result<SocketAddr> {
    let app = Router::new().route("/api/v0/add", post(add));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, app).await });
    Ok(address)
}

fn credentials() -> IpfsCredentials {
    IpfsCredentials {
        project_id: "project".to_string(),
        project_secret: "secret".to_string(),
    }
}

#[test_log::test(tokio::test)]
async fn test_add_returns_content_id() -> anyhow::Result<()> {
    let address = start_api().await?;
    let uploader = IpfsUploader::new(&format!("http://{address}/api/v0/"), Some(credentials()))?;
    let content_id = uploader.add("card.svg", ARTWORK.to_vec()).await?;
    assert_eq!(content_id, "bafylanterns");
    Ok(())
}

#[test_log::test(tokio::test)]
async fn test_add_without_credentials_is_rejected() -> anyhow::Result<()> {
    let address = start_api().await?;
    let uploader = IpfsUploader::new(&format!("http://{address}/api/v0"), None)?;
    assert_matches!(
        uploader.add("card.svg", ARTWORK.to_vec()).await,
        Err(IpfsError::Rejected { status, body })
            if status == StatusCode::UNAUTHORIZED && body == "invalid project id"
    );
    Ok(())
}

#[test]
fn test_invalid_api_url() {
    assert_matches!(
        IpfsUploader::new("not a url", None),
        Err(IpfsError::UrlParse(_))
    );
}
