//! Command tokenizer and keyword table.
//!
//! A command is a chat line starting with [`COMMAND_MARKER`], e.g. `-cat 3`:
//! the keyword runs up to the first whitespace, the rest (trimmed) is the
//! argument.

/// Leading character that marks a chat line as a bot command
pub const COMMAND_MARKER: char = '-';

/// Commands the bot understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Cat,
    Owo,
    Game,
    Guess,
    Nick,
    Color,
    AddAdmin,
    RemoveAdmin,
    ListAdmins,
    Chat,
    Time,
}

/// Keyword → command. Matching is exact and case-sensitive.
const COMMAND_TABLE: &[(&str, Command)] = &[
    ("help", Command::Help),
    ("cat", Command::Cat),
    ("owo", Command::Owo),
    ("game", Command::Game),
    ("guess", Command::Guess),
    ("nick", Command::Nick),
    ("color", Command::Color),
    ("addadmin", Command::AddAdmin),
    ("removeadmin", Command::RemoveAdmin),
    ("listadmins", Command::ListAdmins),
    ("chat", Command::Chat),
    ("time", Command::Time),
];

impl Command {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        COMMAND_TABLE
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, command)| *command)
    }

    pub fn keyword(self) -> &'static str {
        COMMAND_TABLE
            .iter()
            .find(|(_, command)| *command == self)
            .map_or("", |(k, _)| *k)
    }

    /// Whether only admins may run this command
    pub fn requires_admin(self) -> bool {
        matches!(
            self,
            Command::Nick
                | Command::Color
                | Command::AddAdmin
                | Command::RemoveAdmin
                | Command::ListAdmins
                | Command::Chat
        )
    }
}

/// A chat line split into keyword and argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub keyword: &'a str,
    pub argument: &'a str,
}

/// Split `text` into keyword and argument.
///
/// Returns `None` when the line does not start with the marker or the keyword
/// is empty (`-`, `- cat`).
pub fn tokenize(text: &str) -> Option<ParsedCommand<'_>> {
    let body = text.strip_prefix(COMMAND_MARKER)?;
    let (keyword, argument) = match body.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (body, ""),
    };
    if keyword.is_empty() {
        return None;
    }
    Some(ParsedCommand { keyword, argument })
}
