//! A single checker.
//!
//! A piece does not know where it stands. It only knows which displacements
//! it may make; the board adds them to a position and checks the result.
//!
//! Textual form: `r` / `b` for plain pieces, `R` / `B` for kings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::color::Color;
use super::position::Offset;

/// One checker: fixed color, king flag that only ever goes false -> true.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
    king: bool,
}

impl Piece {
    /// Create a non-king piece.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color, king: false }
    }

    /// Create an already-crowned piece.
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Self { color, king: true }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        self.king
    }

    /// Crown this piece. Idempotent; there is no way back.
    pub fn promote(&mut self) {
        self.king = true;
    }

    /// Simple (non-capturing) displacements.
    ///
    /// Forward diagonals first, then the backward ones for kings. Recomputed
    /// on every call.
    pub fn step_offsets(self) -> impl Iterator<Item = Offset> + Clone {
        let f = self.color.forward();
        let count = if self.king { 4 } else { 2 };
        [
            Offset::new(f, -1),
            Offset::new(f, 1),
            Offset::new(-f, -1),
            Offset::new(-f, 1),
        ]
        .into_iter()
        .take(count)
    }

    /// Capturing displacements: every step offset doubled.
    pub fn jump_offsets(self) -> impl Iterator<Item = Offset> + Clone {
        self.step_offsets().map(Offset::doubled)
    }

    #[must_use]
    pub fn as_char(self) -> char {
        let c = self.color.as_char();
        if self.king {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error for text that is not one of `r`, `b`, `R`, `B`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("string {0:?} does not represent a checker piece")]
pub struct ParsePieceError(pub String);

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" => Ok(Piece::new(Color::Red)),
            "b" => Ok(Piece::new(Color::Black)),
            "R" => Ok(Piece::king(Color::Red)),
            "B" => Ok(Piece::king(Color::Black)),
            other => Err(ParsePieceError(other.to_string())),
        }
    }
}
