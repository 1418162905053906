//! ASCII rendering of a board.
//!
//! ```text
//!    abcdefgh
//!   +--------+
//!  8| b b b b|
//!  7|b b b b |
//!  ...
//!   +--------+
//! ```
//!
//! Row labels count from the bottom, matching position notation.

use std::fmt;

use super::state::Board;
use crate::core::Position;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let horizontal = format!("  +{}+", "-".repeat(size.max(0) as usize));

        let letters: String = (0..size)
            .map(|c| Position::new(0, c).to_notation(size).remove(0))
            .collect();
        writeln!(f, "   {letters}")?;
        writeln!(f, "{horizontal}")?;

        for row in 0..size {
            let cells: String = (0..size)
                .map(|col| {
                    self.piece_at(Position::new(row, col))
                        .map_or(' ', |piece| piece.as_char())
                })
                .collect();
            writeln!(f, "{:>2}|{cells}|", size - row)?;
        }
        write!(f, "{horizontal}")
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::core::{Color, Piece, Position};

    #[test]
    fn test_render_standard_board() {
        let rendered = Board::standard().to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "   abcdefgh");
        assert_eq!(lines[1], "  +--------+");
        assert_eq!(lines[2], " 8| b b b b|");
        assert_eq!(lines[3], " 7|b b b b |");
        assert_eq!(lines[5], " 5|        |");
        assert_eq!(lines[9], " 1|r r r r |");
        assert_eq!(lines[10], "  +--------+");
    }

    #[test]
    fn test_render_kings() {
        let mut board = Board::empty(4);
        board.place(Position::new(0, 1), Piece::king(Color::Red));
        board.place(Position::new(3, 2), Piece::king(Color::Black));

        let rendered = board.to_string();
        assert!(rendered.contains(" 4| R  |"));
        assert!(rendered.contains(" 1|  B |"));
    }
}
