//! Reasons a command is turned down.
//!
//! The `Display` text is what follows `REJECTED:` on the wire. Squares are
//! given in wire notation (`a3`), as the player typed them.

/// Why a command was rejected. The mover may always try again.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("No path in move")]
    NoPath,

    #[error("Unparseable position {0:?}")]
    BadPosition(String),

    #[error("Every step of a multi-step move must be a jump ({from} -> {to} is not)")]
    JumpRequired { from: String, to: String },

    #[error("Only kings may move backward ({from} -> {to})")]
    BackwardMove { from: String, to: String },

    #[error("Not a valid checkers move ({from} -> {to})")]
    IllegalMove { from: String, to: String },

    #[error("Jump sequence must continue while a jump is available")]
    IncompleteChain,

    #[error("Not a valid command: {0}")]
    UnknownCommand(String),

    #[error("Unparseable command")]
    Unparseable,
}
