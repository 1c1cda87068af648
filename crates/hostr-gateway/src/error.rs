//! Error types for the gateway.
//!
//! Every failure in the resolution pipeline is converted into an HTTP
//! response at the handler boundary; responses carry a short plain-text
//! reason and never expose internal diagnostic state.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Gateway error type.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The subdomain label is not a decodable public key.
    #[error("invalid identity: {0}")]
    InvalidIdentity(String),

    /// No filemap event matched (publisher, lookup key) on the relay.
    #[error("no filemap event for [{key}] on relay [{relay}]")]
    MappingNotFound { key: String, relay: String },

    /// The relay query failed (connection, protocol, timeout).
    #[error("relay query failed: {0}")]
    Relay(#[from] nostr_sdk::client::Error),

    /// The relay is not connected, so absence cannot be distinguished
    /// from outage.
    #[error("relay [{relay}] is unreachable")]
    RelayUnreachable { relay: String },

    /// The relay returned a filemap event without a usable sha256 tag.
    #[error("malformed filemap event: {0}")]
    MalformedEvent(String),

    /// The Blossom server answered with an error status.
    #[error("blossom server returned status {status}")]
    ContentStatus { status: u16, body: String },

    /// The Blossom server could not be reached.
    #[error("blossom fetch failed: {0}")]
    ContentTransport(#[from] reqwest::Error),

    /// The Host header does not belong to the configured serving domain.
    /// Signals a routing/deployment fault, not a client error.
    #[error("host [{host}] is outside the configured serving domain")]
    HostMismatch { host: String },
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidIdentity(msg) => {
                tracing::debug!(error = %msg, "rejected subdomain label");
                (
                    StatusCode::NOT_FOUND,
                    "Subdomain is not a valid npub.".to_string(),
                )
            }
            Self::MappingNotFound { key, relay } => (
                StatusCode::NOT_FOUND,
                format!("Filemap event for [{key}] not found on relay [{relay}]."),
            ),
            Self::Relay(err) => {
                tracing::error!(error = %err, "relay query failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "The relay could not be queried. Please try again later.".to_string(),
                )
            }
            Self::RelayUnreachable { relay } => {
                tracing::error!(relay = %relay, "relay unreachable");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Relay [{relay}] is unreachable. Please try again later."),
                )
            }
            Self::MalformedEvent(msg) => {
                tracing::warn!(error = %msg, "malformed filemap event");
                (
                    StatusCode::BAD_GATEWAY,
                    "The relay returned a malformed filemap event.".to_string(),
                )
            }
            Self::ContentStatus { status, body } => (
                // An upstream status we cannot represent degrades to 502.
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("Blossom server returned [{body}]"),
            ),
            Self::ContentTransport(err) => {
                tracing::error!(error = %err, "blossom fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "The content server could not be reached. Please try again later.".to_string(),
                )
            }
            Self::HostMismatch { host } => {
                tracing::error!(host = %host, "request host outside serving domain");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Web server configuration error.".to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}
