//! Bot configuration.

use std::time::Duration;

use crate::{
    domain::{AdminTokens, Color, SessionProfile, SessionState, session::is_valid_nickname},
    error::BotError,
};

pub const DEFAULT_URL: &str = "wss://hack.chat/chat-ws";
pub const DEFAULT_CHANNEL: &str = "loungee";
pub const DEFAULT_NICKNAME: &str = "bot";
pub const DEFAULT_PASSWORD: &str = "botpassword";
pub const DEFAULT_SUPER_ADMIN: &str = "123456";
pub const DEFAULT_COLOR: &str = "FFFFFF";
pub const RECONNECT_DELAY_SECS: u64 = 10;

/// Connection and identity settings, fixed for the process lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// WebSocket endpoint of the chat service
    pub url: String,
    pub channel: String,
    /// Initial nickname; `-nick` changes the live value only
    pub nickname: String,
    /// Join password; the server derives the bot's trip from it
    pub password: String,
    /// Seed admin trip that can never be removed
    pub super_admin: String,
    pub color: String,
    pub reconnect_delay: Duration,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            channel: DEFAULT_CHANNEL.to_string(),
            nickname: DEFAULT_NICKNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            super_admin: DEFAULT_SUPER_ADMIN.to_string(),
            color: DEFAULT_COLOR.to_string(),
            reconnect_delay: Duration::from_secs(RECONNECT_DELAY_SECS),
        }
    }
}

impl BotConfig {
    /// Validate the identity settings and build the initial session state.
    pub fn initial_state(&self) -> Result<SessionState, BotError> {
        if !is_valid_nickname(&self.nickname) {
            return Err(BotError::Config(format!(
                "nickname '{}' may only contain letters, digits and underscores",
                self.nickname
            )));
        }
        let color: Color = self
            .color
            .parse()
            .map_err(|e| BotError::Config(format!("{e}")))?;
        let admins =
            AdminTokens::new(self.super_admin.as_str()).map_err(|e| BotError::Config(e.to_string()))?;

        Ok(SessionState::new(
            SessionProfile {
                nickname: self.nickname.clone(),
                color,
            },
            admins,
        ))
    }
}
