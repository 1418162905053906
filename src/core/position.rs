//! Board coordinates and displacements.
//!
//! `(0, 0)` is the top-left corner; rows grow downward. Coordinates are
//! signed so that off-board destinations (e.g. `(4, -1)`) can be expressed
//! and rejected by bounds checks instead of failing to construct.
//!
//! ## Notation
//!
//! The wire notation is a column letter followed by a row number counted
//! from the bottom of the board:
//!
//! ```
//! use rust_checkers::core::Position;
//!
//! assert_eq!(Position::parse_notation("a8", 8), Ok(Position::new(0, 0)));
//! assert_eq!(Position::parse_notation("b6", 8), Ok(Position::new(2, 1)));
//! assert_eq!(Position::new(2, 1).to_notation(8), "b6");
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A square on the board as `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

/// A displacement between two positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub d_row: i32,
    pub d_col: i32,
}

impl Offset {
    #[must_use]
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// The same direction, twice as far.
    #[must_use]
    pub const fn doubled(self) -> Self {
        Self::new(self.d_row * 2, self.d_col * 2)
    }
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Dark squares are the only ones pieces may occupy.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col).rem_euclid(2) == 1
    }

    /// Check that both coordinates lie in `[0, size)`.
    #[must_use]
    pub const fn in_bounds(self, size: i32) -> bool {
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }

    /// The square halfway between `self` and `other`.
    ///
    /// Only meaningful for jump displacements, where both deltas are even.
    #[must_use]
    pub const fn midpoint(self, other: Position) -> Position {
        Position::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    /// Parse wire notation such as `a8` for a board of `size` rows.
    ///
    /// The result is not bounds-checked: `z9` parses on an 8x8 board and is
    /// later rejected by the board as out of range.
    pub fn parse_notation(text: &str, size: i32) -> Result<Position, ParsePositionError> {
        let text = text.trim();
        let mut chars = text.chars();
        let letter = chars
            .next()
            .filter(char::is_ascii_lowercase)
            .ok_or_else(|| ParsePositionError(text.to_string()))?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParsePositionError(text.to_string()));
        }
        let number: i32 = digits
            .parse()
            .map_err(|_| ParsePositionError(text.to_string()))?;

        let col = letter as i32 - 'a' as i32;
        Ok(Position::new(size - number, col))
    }

    /// Format as wire notation for a board of `size` rows.
    #[must_use]
    pub fn to_notation(self, size: i32) -> String {
        let letter = u8::try_from(self.col)
            .ok()
            .and_then(|c| b'a'.checked_add(c))
            .map_or('?', char::from);
        format!("{}{}", letter, size - self.row)
    }
}

impl Add<Offset> for Position {
    type Output = Position;

    fn add(self, offset: Offset) -> Position {
        Position::new(self.row + offset.d_row, self.col + offset.d_col)
    }
}

impl Sub for Position {
    type Output = Offset;

    fn sub(self, other: Position) -> Offset {
        Offset::new(self.row - other.row, self.col - other.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error for text that is not a column letter followed by a row number.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unparseable position {0:?}")]
pub struct ParsePositionError(pub String);
