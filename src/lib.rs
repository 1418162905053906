//! # rust-checkers
//!
//! A two-player checkers rule engine plus a small turn-arbitration protocol
//! for remote play.
//!
//! ## Design Principles
//!
//! 1. **The board owns the rules**: bounds, dark squares, forced jumps,
//!    captures and promotion all live in `Board`. Pieces only know their
//!    own displacements.
//!
//! 2. **Validate on a copy, commit on success**: a whole `MOVE` command is
//!    played on a scratch board. The live board is replaced only if every
//!    hop is accepted, so a rejected command never leaves a trace.
//!
//! 3. **Sessions are self-contained**: a `Session` owns its board and two
//!    injected `Player` capabilities. Nothing is global, so independent
//!    sessions can run side by side.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) board cloning via `im-rs` makes
//!   the scratch copy per command free.
//!
//! - **Strict alternation**: exactly one command is outstanding at a time;
//!   the only suspension point is waiting for a player's next line.
//!
//! ## Modules
//!
//! - `core`: colors, positions, pieces, seats, configuration, RNG
//! - `board`: piece placement and move legality
//! - `rules`: multi-hop move commands, rejections, game results
//! - `session`: the turn state machine and the `Player` capability
//! - `protocol`: `COMMAND:payload` lines and typed messages
//! - `transport`: line framing and remote players over byte streams
//! - `server`: TCP listener running one session per pair of connections
//! - `client`: terminal client relay logic

pub mod core;
pub mod board;
pub mod rules;
pub mod session;
pub mod protocol;
pub mod transport;
pub mod server;
pub mod client;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Color, ConfigError, GameRng, Offset, Piece, Position, Seat, SeatMap,
};

pub use crate::board::Board;

pub use crate::rules::{play_path, EndReason, GameResult, Rejection};

pub use crate::session::{Player, ScriptedPlayer, Session, SessionState};

pub use crate::protocol::{
    parse_command, parse_path, Command, GameStart, Message, MovePath, ProtocolError, TurnOrder,
    Verdict,
};

pub use crate::transport::{LineReader, LineWriter, RemotePlayer};

pub use crate::server::{Server, ServerConfig, ServerError};
