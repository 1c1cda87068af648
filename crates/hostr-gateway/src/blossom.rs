//! Blob retrieval from the Blossom server.
//!
//! Blossom serves content-addressed blobs as `GET <base>/<sha256>`. The
//! gateway relays the body and content type verbatim; an upstream error
//! status is carried back to the caller together with the upstream body
//! text.

use bytes::Bytes;
use reqwest::header;

use crate::error::GatewayError;

/// A fetched blob: raw bytes plus the upstream-reported content type.
#[derive(Debug, Clone)]
pub struct Blob {
    pub bytes: Bytes,
    pub content_type: String,
}

/// Content type used when the Blossom server does not report one.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Fetch a blob by digest.
pub async fn fetch(
    http: &reqwest::Client,
    blossom_url: &str,
    digest: &str,
) -> Result<Blob, GatewayError> {
    let url = format!("{blossom_url}/{digest}");
    let response = http.get(&url).send().await?;

    let status = response.status();
    if status.as_u16() >= 300 {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::ContentStatus {
            status: status.as_u16(),
            body,
        });
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_string();

    let bytes = response.bytes().await?;

    Ok(Blob {
        bytes,
        content_type,
    })
}
