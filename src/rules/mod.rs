//! Turn-level rules.
//!
//! `play_path` turns a whole `MOVE` command into a new board (or a
//! `Rejection`), enforcing the chain rules that span several hops:
//! - multi-hop commands are jumps only
//! - non-kings never move backward within a command
//! - a jump sequence is carried on until no capture remains, unless the
//!   piece is crowned along the way
//!
//! `GameResult` records who won and why.

pub mod engine;
pub mod rejection;

pub use engine::{play_path, EndReason, GameResult};
pub use rejection::Rejection;
