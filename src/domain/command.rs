//! Chat command parsing.

/// Supported chat commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    /// `!leaderboard` - post today's ranking.
    Leaderboard,
    /// `!mysales` - post the sender's own total.
    MySales,
}

impl ChatCommand {
    /// The literal users type to invoke the command.
    #[must_use]
    pub const fn trigger(self) -> &'static str {
        match self {
            Self::Leaderboard => "!leaderboard",
            Self::MySales => "!mysales",
        }
    }
}

/// Parse error for chat messages that are not commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a chat message into a bot command.
///
/// The whole trimmed text must equal a trigger, ignoring case;
/// `!leaderboard please` is not a command.
pub fn parse_command(text: &str) -> Result<ChatCommand, CommandParseError> {
    let text = text.trim();
    if !text.starts_with('!') {
        return Err(CommandParseError::NotACommand);
    }

    [ChatCommand::Leaderboard, ChatCommand::MySales]
        .into_iter()
        .find(|cmd| text.eq_ignore_ascii_case(cmd.trigger()))
        .ok_or_else(|| CommandParseError::UnknownCommand(text.to_string()))
}
