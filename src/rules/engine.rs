//! Command-level move validation and game results.
//!
//! A `MOVE` command is an ordered path of two or more positions. The whole
//! path is played on a scratch copy of the board; the caller only sees the
//! resulting board if every hop was accepted.

use crate::board::Board;
use crate::core::{Color, Piece, Position, Seat};

use super::rejection::Rejection;

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The loser sent `QUIT`.
    Quit,
    /// The loser's connection closed.
    Disconnect,
    /// The loser had no legal move after the winner's move.
    NoMoves,
}

/// Result of a completed game. There are no draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Seat,
    pub reason: EndReason,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: Seat, reason: EndReason) -> Self {
        Self { winner, reason }
    }

    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        self.winner == seat
    }

    #[must_use]
    pub const fn loser(&self) -> Seat {
        self.winner.other()
    }
}

/// Play a full move path for `color` on a copy of `board`.
///
/// Rules applied on top of `Board::move_piece` for each hop:
/// - a path of more than two positions must consist only of jumps
/// - a piece that was not a king when the command started never moves
///   backward, even if it is crowned partway through
/// - a jump sequence must go on while the piece can still capture, unless
///   the piece was crowned during this command
///
/// Returns the new board, or the first reason the path fails. `board` is
/// never modified.
pub fn play_path(board: &Board, path: &[Position], color: Color) -> Result<Board, Rejection> {
    if path.len() < 2 {
        return Err(Rejection::NoPath);
    }

    let size = board.size();
    let mut scratch = board.clone();
    let started_king = scratch.piece_at(path[0]).is_some_and(Piece::is_king);
    let require_jumps = path.len() > 2;
    let mut all_jumps = true;

    for hop in path.windows(2) {
        let (from, to) = (hop[0], hop[1]);
        let is_jump = scratch.is_move_jump(from, to);

        if require_jumps && !is_jump {
            return Err(Rejection::JumpRequired {
                from: from.to_notation(size),
                to: to.to_notation(size),
            });
        }
        if !started_king && (to.row - from.row) * color.forward() < 0 {
            return Err(Rejection::BackwardMove {
                from: from.to_notation(size),
                to: to.to_notation(size),
            });
        }
        if !scratch.move_piece(from, to, color) {
            return Err(Rejection::IllegalMove {
                from: from.to_notation(size),
                to: to.to_notation(size),
            });
        }
        all_jumps &= is_jump;
    }

    let last = path[path.len() - 1];
    let crowned = !started_king && scratch.piece_at(last).is_some_and(Piece::is_king);
    if all_jumps && !crowned && scratch.has_capture_from(last) {
        return Err(Rejection::IncompleteChain);
    }

    Ok(scratch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn board_with(pieces: &[(i32, i32, Piece)]) -> Board {
        let mut board = Board::empty(8);
        for &(row, col, piece) in pieces {
            assert!(board.place(pos(row, col), piece));
        }
        board
    }

    #[test]
    fn test_game_result() {
        let result = GameResult::new(Seat::SECOND, EndReason::Quit);
        assert!(result.is_winner(Seat::SECOND));
        assert!(!result.is_winner(Seat::FIRST));
        assert_eq!(result.loser(), Seat::FIRST);
    }

    #[test]
    fn test_short_paths_rejected() {
        let board = Board::standard();
        assert_eq!(play_path(&board, &[], Color::Red), Err(Rejection::NoPath));
        assert_eq!(play_path(&board, &[pos(5, 0)], Color::Red), Err(Rejection::NoPath));
    }

    #[test]
    fn test_simple_step() {
        let board = Board::standard();
        let next = play_path(&board, &[pos(5, 0), pos(4, 1)], Color::Red).unwrap();

        assert_eq!(next.piece_at(pos(4, 1)), Some(Piece::new(Color::Red)));
        assert_eq!(board.piece_at(pos(5, 0)), Some(Piece::new(Color::Red)));
    }

    #[test]
    fn test_double_jump() {
        let board = board_with(&[
            (1, 0, Piece::new(Color::Black)),
            (2, 1, Piece::new(Color::Red)),
            (4, 3, Piece::new(Color::Red)),
        ]);

        let next = play_path(&board, &[pos(1, 0), pos(3, 2), pos(5, 4)], Color::Black).unwrap();
        assert_eq!(next.count(Color::Red), 0);
        assert_eq!(next.piece_at(pos(5, 4)), Some(Piece::new(Color::Black)));
    }

    #[test]
    fn test_chain_must_be_completed() {
        let board = board_with(&[
            (1, 0, Piece::new(Color::Black)),
            (2, 1, Piece::new(Color::Red)),
            (4, 3, Piece::new(Color::Red)),
        ]);

        assert_eq!(
            play_path(&board, &[pos(1, 0), pos(3, 2)], Color::Black),
            Err(Rejection::IncompleteChain)
        );
    }

    #[test]
    fn test_chain_with_step_rejected() {
        let board = board_with(&[
            (1, 0, Piece::new(Color::Black)),
            (2, 1, Piece::new(Color::Red)),
        ]);

        assert_eq!(
            play_path(&board, &[pos(1, 0), pos(3, 2), pos(4, 3)], Color::Black),
            Err(Rejection::JumpRequired {
                from: "c5".into(),
                to: "d4".into()
            })
        );
    }

    #[test]
    fn test_crowning_ends_chain() {
        // Red jumps onto row 0; as a king it could then jump back over (1, 4),
        // but crowning ends the turn instead.
        let board = board_with(&[
            (2, 1, Piece::new(Color::Red)),
            (1, 2, Piece::new(Color::Black)),
            (1, 4, Piece::new(Color::Black)),
        ]);

        let next = play_path(&board, &[pos(2, 1), pos(0, 3)], Color::Red).unwrap();
        assert!(next.piece_at(pos(0, 3)).unwrap().is_king());
        assert!(next.has_capture_from(pos(0, 3)));

        // The freshly crowned piece may not continue backward either.
        assert_eq!(
            play_path(&board, &[pos(2, 1), pos(0, 3), pos(2, 5)], Color::Red),
            Err(Rejection::BackwardMove {
                from: "d8".into(),
                to: "f6".into()
            })
        );
    }

    #[test]
    fn test_king_may_jump_backward() {
        let board = board_with(&[
            (2, 1, Piece::king(Color::Red)),
            (3, 2, Piece::new(Color::Black)),
        ]);

        let next = play_path(&board, &[pos(2, 1), pos(4, 3)], Color::Red).unwrap();
        assert_eq!(next.count(Color::Black), 0);
        assert!(next.piece_at(pos(4, 3)).unwrap().is_king());
    }

    #[test]
    fn test_rejected_path_leaves_board_untouched() {
        let board = board_with(&[
            (1, 0, Piece::new(Color::Black)),
            (2, 1, Piece::new(Color::Red)),
            (4, 3, Piece::new(Color::Red)),
        ]);
        let before = board.clone();

        // First hop is legal, second is not a legal jump.
        assert!(play_path(&board, &[pos(1, 0), pos(3, 2), pos(5, 0)], Color::Black).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_rejections_use_wire_notation() {
        let board = Board::standard();
        let rejection = play_path(&board, &[pos(5, 0), pos(4, 0)], Color::Red).unwrap_err();

        assert_eq!(
            rejection,
            Rejection::IllegalMove {
                from: "a3".into(),
                to: "a4".into()
            }
        );
        assert_eq!(rejection.to_string(), "Not a valid checkers move (a3 -> a4)");
    }

    #[test]
    fn test_rejection_text() {
        assert_eq!(Rejection::NoPath.to_string(), "No path in move");
        assert_eq!(
            Rejection::UnknownCommand("FOO".into()).to_string(),
            "Not a valid command: FOO"
        );
    }
}
