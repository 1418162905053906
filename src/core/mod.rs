//! Core value types: colors, positions, pieces, seats, configuration, RNG.
//!
//! This module contains the leaf building blocks. Nothing here knows about
//! other pieces on the board; all positional reasoning lives in `board`.

pub mod color;
pub mod position;
pub mod piece;
pub mod player;
pub mod config;
pub mod rng;

pub use color::{Color, ParseColorError};
pub use position::{Offset, ParsePositionError, Position};
pub use piece::{ParsePieceError, Piece};
pub use player::{Seat, SeatMap};
pub use config::{BoardConfig, ConfigError, MAX_BOARD_SIZE};
pub use rng::GameRng;
