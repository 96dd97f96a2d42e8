//! UseCase: チャットコマンドの解釈と応答
//!
//! `CommandInterpreter::handle` classifies an inbound record, checks the
//! caller's privileges and returns the outbound records to send, in order.
//! It owns all mutable session state, so independent instances never share
//! anything.

use std::sync::Arc;

use hcbot_shared::time::{Clock, DEFAULT_TIMEZONE, SystemClock, format_in_timezone};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::BotConfig,
    domain::{
        AdminError, Color, GuessOutcome, InboundMessage, OutboundMessage, SessionState,
        session::is_valid_nickname,
    },
    error::BotError,
};

use super::{
    command::{Command, tokenize},
    replies,
};

const CAT_RANGE: std::ops::RangeInclusive<u8> = 1..=10;
const DICE_RANGE: std::ops::RangeInclusive<u8> = 1..=6;

/// Where replies to a command go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyTarget {
    /// Broadcast in the channel
    Public,
    /// Whisper back to this nickname
    Whisper(String),
}

impl ReplyTarget {
    pub fn reply(&self, text: impl Into<String>) -> OutboundMessage {
        match self {
            ReplyTarget::Public => OutboundMessage::chat(text),
            ReplyTarget::Whisper(nick) => OutboundMessage::whisper(nick.clone(), text),
        }
    }
}

/// Command interpreter holding the session state
pub struct CommandInterpreter<R = StdRng> {
    state: SessionState,
    rng: R,
    clock: Arc<dyn Clock>,
}

impl CommandInterpreter<StdRng> {
    /// Build an interpreter from configuration, seeded from the OS and using the system clock.
    pub fn from_config(config: &BotConfig) -> Result<Self, BotError> {
        Ok(Self::new(
            config.initial_state()?,
            StdRng::from_os_rng(),
            Arc::new(SystemClock),
        ))
    }
}

impl<R: Rng> CommandInterpreter<R> {
    pub fn new(state: SessionState, rng: R, clock: Arc<dyn Clock>) -> Self {
        Self { state, rng, clock }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Handle one inbound record and return the records to send.
    ///
    /// Non-chat records, lines without the command marker, unknown keywords
    /// and the bot's own public lines produce nothing.
    pub fn handle(&mut self, message: InboundMessage) -> Vec<OutboundMessage> {
        let (speaker, trip, text, target) = match message {
            InboundMessage::PublicChat { nick, .. } if nick == self.state.profile.nickname => {
                return Vec::new();
            }
            InboundMessage::PublicChat { nick, trip, text } => {
                (nick, trip, text, ReplyTarget::Public)
            }
            InboundMessage::Whisper { nick, text } => {
                let target = ReplyTarget::Whisper(nick.clone());
                (nick, None, text, target)
            }
            InboundMessage::Other => return Vec::new(),
        };

        let Some(parsed) = tokenize(&text) else {
            return Vec::new();
        };
        let Some(command) = Command::from_keyword(parsed.keyword) else {
            tracing::debug!("Ignoring unknown command '{}' from '{}'", parsed.keyword, speaker);
            return Vec::new();
        };

        if command.requires_admin() && !self.state.admins.is_admin(trip.as_deref()) {
            tracing::warn!(
                speaker = %speaker,
                trip = ?trip,
                command = command.keyword(),
                "Unauthorized privileged command attempt"
            );
            return vec![target.reply(replies::ADMIN_ONLY)];
        }

        tracing::debug!("'{}' invoked -{} {:?}", speaker, command.keyword(), parsed.argument);
        self.execute(command, parsed.argument, &target)
    }

    fn execute(
        &mut self,
        command: Command,
        argument: &str,
        target: &ReplyTarget,
    ) -> Vec<OutboundMessage> {
        match command {
            Command::Help => vec![target.reply(replies::HELP)],
            Command::Cat => vec![target.reply(self.cat(argument))],
            Command::Owo => {
                let value = self.rng.random_range(DICE_RANGE);
                vec![target.reply(replies::dice(value))]
            }
            Command::Game => {
                let number = self.state.game.start(&mut self.rng);
                tracing::debug!("Guessing game started with target {}", number);
                vec![target.reply(replies::GAME_STARTED)]
            }
            Command::Guess => vec![target.reply(self.guess(argument))],
            Command::Nick => self.change_nickname(argument, target),
            Command::Color => self.change_color(argument, target),
            Command::AddAdmin => vec![target.reply(self.add_admin(argument))],
            Command::RemoveAdmin => vec![target.reply(self.remove_admin(argument))],
            Command::ListAdmins => {
                vec![target.reply(replies::admin_list(self.state.admins.list()))]
            }
            Command::Chat => {
                if argument.is_empty() {
                    Vec::new()
                } else {
                    vec![OutboundMessage::chat(argument)]
                }
            }
            Command::Time => vec![target.reply(self.current_time(argument))],
        }
    }

    fn cat(&mut self, argument: &str) -> String {
        let count = match argument.parse::<u8>() {
            Ok(n) if CAT_RANGE.contains(&n) => n,
            _ => self.rng.random_range(CAT_RANGE),
        };
        replies::CAT_GLYPH.repeat(usize::from(count))
    }

    fn guess(&self, argument: &str) -> String {
        match self.state.game.guess(argument.parse::<i64>().ok()) {
            GuessOutcome::OutOfRange => replies::GUESS_RANGE.to_string(),
            GuessOutcome::Correct(target) => replies::guess_correct(target),
            GuessOutcome::TooSmall => replies::GUESS_TOO_SMALL.to_string(),
            GuessOutcome::TooLarge => replies::GUESS_TOO_LARGE.to_string(),
        }
    }

    fn change_nickname(&mut self, argument: &str, target: &ReplyTarget) -> Vec<OutboundMessage> {
        if !is_valid_nickname(argument) {
            tracing::debug!("Rejected nickname {:?}", argument);
            return vec![target.reply(replies::ADMIN_ONLY)];
        }

        self.state.profile.nickname = argument.to_string();
        tracing::info!("Nickname changed to '{}'", argument);
        vec![
            OutboundMessage::chat(format!("/nick {argument}")),
            target.reply(replies::nick_changed(argument)),
        ]
    }

    fn change_color(&mut self, argument: &str, target: &ReplyTarget) -> Vec<OutboundMessage> {
        let color = if argument == "random" {
            Color::random(&mut self.rng)
        } else {
            match argument.parse::<Color>() {
                Ok(color) => color,
                Err(e) => {
                    tracing::debug!("{}", e);
                    return vec![target.reply(replies::INVALID_COLOR)];
                }
            }
        };

        let rendered = color.to_string();
        self.state.profile.color = color;
        tracing::info!("Color changed to {}", rendered);
        vec![
            OutboundMessage::chat(format!("/color {rendered}")),
            target.reply(replies::color_changed(&rendered)),
        ]
    }

    fn add_admin(&mut self, trip: &str) -> String {
        match self.state.admins.add(trip) {
            Ok(()) => {
                tracing::info!("Admin '{}' added", trip);
                replies::admin_added(trip)
            }
            Err(e) => {
                tracing::debug!("{}", e);
                replies::ADD_ADMIN_REFUSED.to_string()
            }
        }
    }

    fn remove_admin(&mut self, trip: &str) -> String {
        match self.state.admins.remove(trip) {
            Ok(()) => {
                tracing::info!("Admin '{}' removed", trip);
                replies::admin_removed(trip)
            }
            Err(AdminError::SuperAdmin(_)) => {
                replies::super_admin_protected(self.state.admins.super_admin())
            }
            Err(e) => {
                tracing::debug!("{}", e);
                replies::ADMIN_NOT_FOUND.to_string()
            }
        }
    }

    fn current_time(&self, argument: &str) -> String {
        let timezone = if argument.is_empty() {
            DEFAULT_TIMEZONE
        } else {
            argument
        };
        match format_in_timezone(self.clock.now(), timezone) {
            Ok(formatted) => replies::current_time(timezone, &formatted),
            Err(e) => {
                tracing::debug!("{}", e);
                replies::TIME_FALLBACK.to_string()
            }
        }
    }
}
