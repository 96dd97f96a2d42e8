//! Infrastructure layer
//!
//! Wire formats of the chat service and the WebSocket `Transport`.

pub mod dto;
pub mod transport;
