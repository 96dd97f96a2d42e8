//! Conversion logic between DTOs and domain records.

use std::sync::OnceLock;

use regex::Regex;

use crate::{
    domain::{InboundMessage, OutboundMessage},
    error::BotError,
    infrastructure::dto::websocket::{InboundPayload, OutboundPayload},
};

/// Parse a raw inbound payload.
pub fn decode_inbound(raw: &str) -> Result<InboundMessage, BotError> {
    let payload: InboundPayload = serde_json::from_str(raw)?;
    Ok(payload.into())
}

/// Serialize an outbound record.
pub fn encode_outbound(message: OutboundMessage) -> Result<String, BotError> {
    serde_json::to_string(&OutboundPayload::from(message)).map_err(BotError::Encode)
}

/// Split a `<nick> whispered: <text>` notice into its parts.
fn unwrap_whisper(notice: &str) -> Option<(String, String)> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let captures = PATTERN
        .get_or_init(|| {
            Regex::new(r"^([a-zA-Z0-9_]+) whispered: (.*)$").expect("Invalid whisper pattern")
        })
        .captures(notice)?;
    Some((captures[1].to_string(), captures[2].to_string()))
}

// ========================================
// DTO → Domain
// ========================================

impl From<InboundPayload> for InboundMessage {
    fn from(payload: InboundPayload) -> Self {
        match (payload.cmd.as_str(), payload.kind.as_deref()) {
            ("chat", _) => match (payload.nick, payload.text) {
                (Some(nick), Some(text)) => InboundMessage::PublicChat {
                    nick,
                    trip: payload.trip.filter(|trip| !trip.is_empty()),
                    text,
                },
                _ => InboundMessage::Other,
            },
            ("info", Some("whisper")) => payload
                .text
                .as_deref()
                .and_then(unwrap_whisper)
                .map_or(InboundMessage::Other, |(nick, text)| {
                    InboundMessage::Whisper { nick, text }
                }),
            _ => InboundMessage::Other,
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<OutboundMessage> for OutboundPayload {
    fn from(message: OutboundMessage) -> Self {
        match message {
            OutboundMessage::Join {
                nick,
                password,
                channel,
            } => Self::Join {
                nick,
                password,
                channel,
            },
            OutboundMessage::Chat { text } => Self::Chat { text },
            OutboundMessage::Whisper { nick, text } => Self::Whisper { nick, text },
        }
    }
}
