//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::Config;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Relay client used for filemap queries.
    pub relay: nostr_sdk::Client,

    /// HTTP client for Blossom fetches, bound to the configured timeout.
    pub http: reqwest::Client,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create the application state and connect to the configured relay.
    ///
    /// The connection is established in the background; a relay that is
    /// still unreachable at request time surfaces as an upstream error,
    /// not a startup failure.
    pub async fn connect(config: Config) -> anyhow::Result<Self> {
        let relay = nostr_sdk::Client::default();
        relay.add_relay(config.relay_url.as_str()).await?;
        relay.connect().await;

        let http = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()?;

        tracing::info!(
            relay = %config.relay_url,
            blossom = %config.blossom_url,
            "gateway state initialized"
        );

        Ok(Self {
            relay,
            http,
            config: Arc::new(config),
        })
    }
}
