//! Data Transfer Objects (DTOs) for the chat service's JSON protocol.
//!
//! - `websocket`: inbound and outbound payload shapes
//! - `conversion`: mapping between payloads and domain records

pub mod conversion;
pub mod websocket;

pub use conversion::{decode_inbound, encode_outbound};
