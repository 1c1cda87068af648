//! Hostr Gateway - Subdomain-addressed static file hosting over Nostr.
//!
//! This crate provides a lightweight HTTP gateway that serves static sites
//! published through Nostr. The subdomain of an incoming request names a
//! publisher (an `npub1...` public key), filemap events on a relay bind that
//! publisher's paths to content digests, and the bytes themselves live on a
//! Blossom content-addressed server.
//!
//! # Architecture
//!
//! - **Host**: Extracts the publisher label from the Host header
//! - **Resolve**: Queries the relay for the filemap event binding
//!   (publisher, path) to a `sha256` content digest
//! - **Fetch**: Retrieves the blob from the Blossom server by digest and
//!   relays it with the upstream content type
//!
//! # URL Pattern
//!
//! ```text
//! GET <npub>.<domain>/{path}
//! ```
//!
//! `/` and any path ending in `/` resolve to `index.html` under that
//! prefix. Every path belongs to the hosted site; the gateway reserves no
//! routes of its own.
//!
//! # Failure Mapping
//!
//! - Invalid npub label or missing filemap event: 404
//! - Relay unreachable or malformed filemap event: 502
//! - Blossom error status: relayed verbatim with the upstream body text
//! - Host outside the configured domain: 500 (deployment fault)

pub mod blossom;
pub mod config;
pub mod error;
pub mod host;
pub mod identity;
pub mod path;
pub mod resolve;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::GatewayError;
pub use routes::router;
pub use state::AppState;
