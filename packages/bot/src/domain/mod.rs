//! Domain layer
//!
//! Session state, the authorization store, the connection lifecycle state
//! machine and the `Transport` seam. Nothing here performs I/O; the
//! infrastructure layer provides the concrete transport.

pub mod admin;
pub mod connection;
pub mod message;
pub mod session;
pub mod transport;

pub use admin::{AdminError, AdminTokens};
pub use connection::{ConnectionState, Lifecycle};
pub use message::{InboundMessage, OutboundMessage};
pub use session::{Color, ColorError, GuessGame, GuessOutcome, SessionProfile, SessionState};
pub use transport::{Transport, TransportEvent};
