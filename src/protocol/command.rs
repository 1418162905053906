//! Raw `COMMAND:payload` lines.

use crate::core::ParsePositionError;

/// Protocol-level errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("command {0:?} did not contain a colon")]
    MissingColon(String),

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("missing field {0:?}")]
    MissingField(&'static str),

    #[error("invalid value {value:?} for field {field:?}")]
    InvalidField { field: String, value: String },

    #[error(transparent)]
    Position(#[from] ParsePositionError),
}

/// One received line, split at its first colon.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    pub name: String,
    pub payload: String,
}

impl Command {
    pub fn new(name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: payload.into(),
        }
    }
}

/// Split a line into command name and payload.
///
/// Only the first colon separates; the payload may contain more. A line
/// without any colon is a format error.
///
/// ```
/// use rust_checkers::protocol::{parse_command, Command};
///
/// assert_eq!(parse_command("MOVE:b6,a5"), Ok(Command::new("MOVE", "b6,a5")));
/// assert_eq!(parse_command("QUIT:"), Ok(Command::new("QUIT", "")));
/// assert!(parse_command("QUIT").is_err());
/// ```
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let (name, payload) = line
        .split_once(':')
        .ok_or_else(|| ProtocolError::MissingColon(line.to_string()))?;
    Ok(Command::new(name, payload))
}
