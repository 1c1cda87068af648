//! Route definitions for the gateway.
//!
//! ## Routes
//!
//! - `GET /` - Serve the site root (`index.html`)
//! - `GET /{*path}` - Serve any file of the hosted site
//!
//! The gateway reserves no routes of its own: every path on a
//! `<npub>.<domain>` host belongs to the published site.

mod serve;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve::serve_file))
        .route("/{*path}", get(serve::serve_file))
        .with_state(state)
}
