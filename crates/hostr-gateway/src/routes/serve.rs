//! Main file-serving route handler.
//!
//! The linear resolution pipeline: Host header → publisher label → lookup
//! key → public key → content digest → blob. Each step fails into a
//! `GatewayError`, which the handler boundary converts to an HTTP
//! response.

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::error::GatewayError;
use crate::state::AppState;
use crate::{blossom, host, identity, path, resolve};

/// Serve one file of a published site.
pub async fn serve_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, GatewayError> {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let label = host::subdomain_label(host, &state.config.domain)?;
    let key = path::lookup_key(uri.path());
    let publisher = identity::decode(label)?;

    tracing::debug!(npub = %label, key = %key, "resolving filemap");

    let digest = resolve::resolve_digest(&state, &publisher, &key).await?;

    tracing::debug!(digest = %digest, "fetching blob");

    let blob = blossom::fetch(&state.http, &state.config.blossom_url, &digest).await?;

    let mut response_headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&blob.content_type) {
        response_headers.insert(header::CONTENT_TYPE, value);
    }

    Ok((StatusCode::OK, response_headers, blob.bytes).into_response())
}
