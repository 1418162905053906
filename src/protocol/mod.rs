//! Line-oriented text protocol.
//!
//! Every message is one line of the form `COMMAND:payload`. A line without
//! a colon is a format error; the server answers it with `REJECTED` and
//! keeps the turn open.

pub mod command;
pub mod message;

pub use command::{parse_command, Command, ProtocolError};
pub use message::{parse_path, GameStart, Message, MovePath, TurnOrder, Verdict};
