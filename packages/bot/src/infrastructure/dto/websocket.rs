//! WebSocket payload DTOs.

use serde::{Deserialize, Serialize};

/// Any payload pushed by the chat service.
///
/// Only the fields the bot reads are declared; the rest are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InboundPayload {
    pub cmd: String,
    pub nick: Option<String>,
    pub text: Option<String>,
    pub trip: Option<String>,
    /// Sub-type of `info` notices, e.g. `"whisper"`
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Requests sent to the chat service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "cmd", rename_all = "lowercase")]
pub enum OutboundPayload {
    Join {
        nick: String,
        password: String,
        channel: String,
    },
    Chat {
        text: String,
    },
    Whisper {
        nick: String,
        text: String,
    },
}
