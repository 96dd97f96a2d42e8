//! Transport trait 定義
//!
//! The session driver only talks to the chat service through this trait;
//! `crate::infrastructure::transport` provides the WebSocket implementation.

use async_trait::async_trait;

use crate::error::BotError;

/// Something that happened on an open connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// Raw text payload
    Message(String),
    /// The peer closed the connection or the stream ended
    Closed,
    /// Read failure; the connection should be closed
    Error(String),
}

/// Bidirectional message channel to the chat service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send {
    /// Open a connection to `url`, replacing any previous one
    async fn open(&mut self, url: &str) -> Result<(), BotError>;

    /// Send one serialized record
    async fn send(&mut self, payload: String) -> Result<(), BotError>;

    /// Wait for the next event. Returns `Closed` when no connection is open.
    async fn next_event(&mut self) -> TransportEvent;

    /// Close the connection if one is open
    async fn close(&mut self);
}
