//! Mutable session state: bot profile, guessing game and the admin set.

use std::{fmt, str::FromStr, sync::OnceLock};

use rand::Rng;
use regex::Regex;
use thiserror::Error;

use super::admin::AdminTokens;

/// Inclusive range of valid guessing-game numbers
pub const GUESS_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// Check that a nickname only uses ASCII letters, digits and underscores.
pub fn is_valid_nickname(name: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("Invalid nickname pattern"))
        .is_match(name)
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid color code '{0}', expected #RRGGBB")]
pub struct ColorError(pub String);

/// 24-bit RGB display color, stored as six uppercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(String);

impl Color {
    /// Pick a color uniformly from the whole RGB space.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(format!("{:06X}", rng.random_range(0..=0xFF_FFFF_u32)))
    }

    /// The six hex digits without the leading `#`
    pub fn hex(&self) -> &str {
        &self.0
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts `#RRGGBB` or bare `RRGGBB`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(digits.to_ascii_uppercase()))
        } else {
            Err(ColorError(s.to_string()))
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How the bot currently presents itself in the channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProfile {
    pub nickname: String,
    pub color: Color,
}

/// Result of comparing a guess with the game's target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess was missing, non-numeric or outside 1..=100
    OutOfRange,
    Correct(u8),
    TooSmall,
    TooLarge,
}

/// Number guessing game shared by everyone in the channel.
///
/// A correct guess does not end the game: the target stays until the next
/// `start`, so repeating the winning guess reports `Correct` again. Before the
/// first `start` there is no target and every in-range guess is `TooLarge`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessGame {
    target: Option<u8>,
}

impl GuessGame {
    /// Start (or restart) the game with a fresh random target.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> u8 {
        let target = rng.random_range(1..=100);
        self.target = Some(target);
        target
    }

    pub fn target(&self) -> Option<u8> {
        self.target
    }

    pub fn guess(&self, value: Option<i64>) -> GuessOutcome {
        let Some(value) = value.filter(|v| GUESS_RANGE.contains(v)) else {
            return GuessOutcome::OutOfRange;
        };
        let Some(target) = self.target else {
            return GuessOutcome::TooLarge;
        };
        match value.cmp(&i64::from(target)) {
            std::cmp::Ordering::Equal => GuessOutcome::Correct(target),
            std::cmp::Ordering::Less => GuessOutcome::TooSmall,
            std::cmp::Ordering::Greater => GuessOutcome::TooLarge,
        }
    }
}

/// Everything the command interpreter reads and mutates
#[derive(Debug, Clone)]
pub struct SessionState {
    pub profile: SessionProfile,
    pub game: GuessGame,
    pub admins: AdminTokens,
}

impl SessionState {
    pub fn new(profile: SessionProfile, admins: AdminTokens) -> Self {
        Self {
            profile,
            game: GuessGame::default(),
            admins,
        }
    }
}
