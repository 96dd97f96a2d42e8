//! Utilities shared by the hcbot binary and its tests.

pub mod logger;
pub mod time;
