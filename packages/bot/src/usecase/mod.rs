//! UseCase layer
//!
//! Turns inbound chat records into outbound replies.

pub mod command;
pub mod interpreter;
pub mod replies;

pub use command::{COMMAND_MARKER, Command, ParsedCommand, tokenize};
pub use interpreter::{CommandInterpreter, ReplyTarget};
