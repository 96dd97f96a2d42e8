//! Inbound and outbound chat records as the bot understands them.
//!
//! Wire formats live in `crate::infrastructure::dto`.

/// A record received from the chat service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundMessage {
    /// Public chat line; `trip` is the speaker's trip code if they have one
    PublicChat {
        nick: String,
        trip: Option<String>,
        text: String,
    },
    /// Private message, already unwrapped from the `<nick> whispered: <text>` notice
    Whisper { nick: String, text: String },
    /// Anything the bot does not react to
    Other,
}

/// A record the bot sends to the chat service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
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

impl OutboundMessage {
    pub fn chat(text: impl Into<String>) -> Self {
        Self::Chat { text: text.into() }
    }

    pub fn whisper(nick: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Whisper {
            nick: nick.into(),
            text: text.into(),
        }
    }
}
