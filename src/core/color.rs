//! Piece colors.
//!
//! Black always starts at the top of the board (row 0) and moves toward
//! increasing rows; Red starts at the bottom and moves toward row 0.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// The opposing color.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row delta of a forward move for a non-king piece of this color.
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Color::Black => 1,
            Color::Red => -1,
        }
    }

    /// Single-letter wire form (`r` / `b`).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Black => 'b',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error returned when a color letter is not `r` or `b`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "r" => Ok(Color::Red),
            "b" => Ok(Color::Black),
            other => Err(ParseColorError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other() {
        assert_eq!(Color::Red.other(), Color::Black);
        assert_eq!(Color::Black.other(), Color::Red);
    }

    #[test]
    fn test_forward() {
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::Red.forward(), -1);
    }

    #[test]
    fn test_parse() {
        assert_eq!("r".parse::<Color>(), Ok(Color::Red));
        assert_eq!("b".parse::<Color>(), Ok(Color::Black));
        assert!("R".parse::<Color>().is_err());
        assert_eq!(Color::Black.to_string(), "b");
    }
}
