//! Filemap resolution against the relay.
//!
//! One query per request: filemap kind, author = publisher key, `d` tag =
//! lookup key. Among matching events the newest `created_at` wins, with
//! ties broken by lowest event id (the replaceable-event convention), so
//! selection does not depend on the relay's return order.

use nostr::{Event, PublicKey};
use nostr_sdk::{Filter, Kind, RelayStatus};

use crate::error::GatewayError;
use crate::state::AppState;

/// Resolve (publisher, lookup key) to a content digest via the relay.
///
/// Returns the lowercased hex sha256 digest from the authoritative filemap
/// event, or an error describing which stage failed.
pub async fn resolve_digest(
    state: &AppState,
    author: &PublicKey,
    key: &str,
) -> Result<String, GatewayError> {
    // An unreachable relay must surface as an upstream failure, not as an
    // empty result set masquerading as 404.
    let relay = state.relay.relay(state.config.relay_url.as_str()).await?;
    if relay.status() != RelayStatus::Connected {
        return Err(GatewayError::RelayUnreachable {
            relay: state.config.relay_url.clone(),
        });
    }

    let filter = Filter::new()
        .kind(Kind::Custom(state.config.filemap_kind))
        .author(*author)
        .identifier(key);

    let events = state
        .relay
        .fetch_events(filter, state.config.relay_timeout)
        .await?;
    let events: Vec<Event> = events.into_iter().collect();

    let event = select_authoritative(&events).ok_or_else(|| GatewayError::MappingNotFound {
        key: key.to_string(),
        relay: state.config.relay_url.clone(),
    })?;

    event_digest(event)
}

/// Pick the authoritative event among all matches.
///
/// Newest `created_at` wins; equal timestamps fall back to the
/// lexicographically smallest event id.
pub fn select_authoritative(events: &[Event]) -> Option<&Event> {
    events.iter().max_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| b.id.as_bytes().cmp(a.id.as_bytes()))
    })
}

/// Extract and validate the sha256 digest carried by a filemap event.
pub fn event_digest(event: &Event) -> Result<String, GatewayError> {
    let digest = digest_tag(event).ok_or_else(|| {
        GatewayError::MalformedEvent(format!("event {} has no sha256 tag", event.id))
    })?;

    if !is_hex_digest(digest) {
        return Err(GatewayError::MalformedEvent(format!(
            "event {} carries a non-hex sha256 tag",
            event.id
        )));
    }

    Ok(digest.to_ascii_lowercase())
}

/// First `sha256` tag value on the event, if any.
fn digest_tag(event: &Event) -> Option<&str> {
    event.tags.iter().find_map(|tag| {
        let slice = tag.as_slice();
        (slice.len() >= 2 && slice[0] == "sha256").then(|| slice[1].as_str())
    })
}

/// A digest must be exactly 64 hex characters; anything else would be
/// spliced into the Blossom URL unchecked.
fn is_hex_digest(value: &str) -> bool {
    value.len() == 64 && value.bytes().all(|b| b.is_ascii_hexdigit())
}
