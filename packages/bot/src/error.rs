//! Error types for the chat bot.

use thiserror::Error;

/// Bot-level errors.
///
/// None of these stop the reconnect loop; only `Config` is fatal, and only
/// at startup.
#[derive(Debug, Error)]
pub enum BotError {
    /// Could not open the connection
    #[error("Connection error: {0}")]
    Connection(String),

    /// Could not deliver an outbound record
    #[error("Send error: {0}")]
    Send(String),

    /// Inbound payload is not valid JSON of the expected shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Outbound record could not be serialized
    #[error("Failed to encode record: {0}")]
    Encode(serde_json::Error),

    /// Invalid startup configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
