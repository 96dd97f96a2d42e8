//! `Transport` implementations
//!
//! - `websocket`: WebSocket (ws:// and wss://) via tokio-tungstenite

pub mod websocket;

pub use websocket::WebSocketTransport;
