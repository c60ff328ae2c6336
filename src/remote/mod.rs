//! # Remote Module
//!
//! HTTP calls to the three services the dashboard talks to.
//!
//! | Source | Request | Response |
//! |--------|---------|----------|
//! | Users | `GET {backend}/sql/` | JSON array of user records |
//! | Minion | `GET {item_api}/{id}` | `{name, sprites: {front_default, back_default}}` |
//! | Chat | `POST {backend}/chat/memory-chat` `{"input": ...}` | `{"response": ...}` |
//!
//! Every call is a single request. There is no retry and no timeout policy
//! beyond the `reqwest` defaults; a failure comes back as an error with the
//! endpoint in its context and the caller decides what to show.

pub mod chat;
pub mod client;
pub mod minion;
pub mod users;

pub use chat::ChatRequest;
pub use client::{Endpoints, RemoteClient, DEFAULT_BACKEND_URL, DEFAULT_ITEM_API_URL};
pub use minion::{random_minion_id, Minion, Sprites, MAX_MINION_ID, MIN_MINION_ID};
pub use users::USER_COLUMNS;

/// Join a base origin and a path, tolerating a trailing slash on the base.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
