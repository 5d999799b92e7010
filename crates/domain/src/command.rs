//! Command — a control token understood by the blind controller.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Known control tokens for the blind motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Roll the blind all the way up.
    Up,
    /// Roll the blind all the way down.
    Down,
    /// Halt the motor where it is.
    Stop,
}

impl Command {
    /// Every known command, in the order the remote displays them.
    pub const ALL: [Self; 3] = [Self::Up, Self::Stop, Self::Down];

    /// Wire token sent to the gateway.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stop => "stop",
        }
    }

    /// Human-readable button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Stop => "Stop",
        }
    }

    /// Match a raw token against the known set. Matching is exact:
    /// `"UP"` or `" up"` are not recognized.
    #[must_use]
    pub fn recognize(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.as_str() == raw)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::recognize(s).ok_or_else(|| ValidationError::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_recognize_every_known_token() {
        assert_eq!(Command::recognize("up"), Some(Command::Up));
        assert_eq!(Command::recognize("down"), Some(Command::Down));
        assert_eq!(Command::recognize("stop"), Some(Command::Stop));
    }

    #[test]
    fn should_not_recognize_differently_cased_token() {
        assert_eq!(Command::recognize("UP"), None);
        assert_eq!(Command::recognize(" up"), None);
    }

    #[test]
    fn should_reject_unknown_token_when_parsing() {
        let err = "sideways".parse::<Command>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownCommand("sideways".to_string()));
    }

    #[test]
    fn should_display_wire_token() {
        assert_eq!(Command::Stop.to_string(), "stop");
    }

    #[test]
    fn should_list_commands_in_remote_order() {
        let labels: Vec<_> = Command::ALL.iter().map(|cmd| cmd.label()).collect();
        assert_eq!(labels, ["Up", "Stop", "Down"]);
    }
}
