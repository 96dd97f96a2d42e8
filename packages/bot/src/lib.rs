//! Command bot for hack.chat style chat rooms.
//!
//! The bot joins one channel over WebSocket, answers `-`-prefixed commands in
//! public chat and whispers, and reconnects after every disconnect.

// layers
pub mod domain;
pub mod infrastructure;
pub mod usecase;

// session control
pub mod config;
pub mod error;
pub mod runner;
pub mod session;

pub use config::BotConfig;
pub use error::BotError;
pub use runner::run_bot;
