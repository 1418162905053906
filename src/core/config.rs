//! Board configuration.
//!
//! Sessions are configured at startup with a `BoardConfig`:
//! - `size`: rows and columns of the square board
//! - `starting_rows`: rows of pieces each side starts with
//!
//! The standard game is 8x8 with three starting rows per side.

use serde::{Deserialize, Serialize};

/// Largest supported board: one column letter per column.
pub const MAX_BOARD_SIZE: usize = 26;

/// Configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {0} is outside 2..={MAX_BOARD_SIZE}")]
    BoardSize(usize),
    #[error("{starting_rows} starting rows per side do not fit on a board of size {size}")]
    StartingRows { size: usize, starting_rows: usize },
}

/// Board dimensions and initial layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Rows and columns of the board.
    pub size: usize,

    /// Rows of pieces per side at the start of a game.
    pub starting_rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 8,
            starting_rows: 3,
        }
    }
}

impl BoardConfig {
    /// Create a new board configuration.
    #[must_use]
    pub const fn new(size: usize, starting_rows: usize) -> Self {
        Self {
            size,
            starting_rows,
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the number of starting rows per side.
    #[must_use]
    pub fn with_starting_rows(mut self, rows: usize) -> Self {
        self.starting_rows = rows;
        self
    }

    /// Check that the layout is constructible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_BOARD_SIZE).contains(&self.size) {
            return Err(ConfigError::BoardSize(self.size));
        }
        if self.starting_rows * 2 > self.size {
            return Err(ConfigError::StartingRows {
                size: self.size,
                starting_rows: self.starting_rows,
            });
        }
        Ok(())
    }
}
