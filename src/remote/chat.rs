//! Chat with the backend's memory-backed assistant.

use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;

/// Path of the chat endpoint, relative to the backend origin.
pub const CHAT_PATH: &str = "chat/memory-chat";

/// Request body: `{"input": "..."}`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub input: &'a str,
}

/// Pull the reply text out of a decoded chat response.
///
/// The documented shape is `{"response": "..."}`. The memory chain behind
/// the endpoint hands back its output as a bare JSON string, so that is
/// accepted as well.
pub fn decode_chat_reply(body: Value) -> Result<String> {
    match body {
        Value::String(reply) => Ok(reply),
        Value::Object(mut map) => match map.remove("response") {
            Some(Value::String(reply)) => Ok(reply),
            Some(other) => Ok(other.to_string()),
            None => bail!("chat reply has no `response` field"),
        },
        other => bail!("chat reply is neither an object nor a string: {}", other),
    }
}
