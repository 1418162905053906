//! Board state and move legality.

use im::HashMap as ImHashMap;

use crate::core::{BoardConfig, Color, ConfigError, Piece, Position};

/// A checkers board: a sparse map of occupied dark squares.
///
/// Uses an `im` persistent map, so `clone()` is O(1) and shares structure
/// with the board it came from. Sessions rely on this to validate a whole command on
/// a scratch copy and only then replace the live board.
///
/// `(0, 0)` is the top-left corner. Black always starts at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: i32,
    pieces: ImHashMap<Position, Piece>,
}

impl Board {
    /// Create a board with the starting layout for `config`.
    ///
    /// Black fills the first `starting_rows` rows from the top, Red the same
    /// number of rows from the bottom, dark squares only.
    pub fn new(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_layout(config.size as i32, config.starting_rows as i32))
    }

    /// The standard 8x8 board with three rows per side.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_layout(8, 3)
    }

    fn with_layout(size: i32, rows: i32) -> Self {
        let mut board = Self::empty(size);
        for (color, row_range) in [(Color::Black, 0..rows), (Color::Red, size - rows..size)] {
            for row in row_range {
                for c in 0..size / 2 {
                    let pos = Position::new(row, c * 2 + (1 - row % 2));
                    board.pieces.insert(pos, Piece::new(color));
                }
            }
        }
        board
    }

    /// Create a board with no pieces. Used to set up arbitrary positions.
    #[must_use]
    pub fn empty(size: i32) -> Self {
        Self {
            size,
            pieces: ImHashMap::new(),
        }
    }

    /// Put a piece on a square, replacing whatever was there.
    ///
    /// Returns false (and does nothing) for off-board or light squares.
    pub fn place(&mut self, pos: Position, piece: Piece) -> bool {
        if !pos.in_bounds(self.size) || !pos.is_playable() {
            return false;
        }
        self.pieces.insert(pos, piece);
        true
    }

    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.pieces.get(&pos).copied()
    }

    /// Iterate over occupied squares. No ordering guarantee.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces.iter().map(|(pos, piece)| (*pos, *piece))
    }

    /// Iterate over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Number of pieces of `color` on the board.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    // === Legality ===

    /// The checks shared by every move: both squares on the board, a piece
    /// of `color` at `src`, an empty dark square at `dest`.
    ///
    /// Returns the moving piece when they all pass.
    fn movable_piece(&self, src: Position, dest: Position, color: Color) -> Option<Piece> {
        if !src.in_bounds(self.size) || !dest.in_bounds(self.size) {
            return None;
        }
        let piece = self.piece_at(src)?;
        if self.pieces.contains_key(&dest) || !dest.is_playable() || piece.color() != color {
            return None;
        }
        Some(piece)
    }

    /// The square jumped over holds an opponent's piece.
    fn jumps_opponent(&self, src: Position, dest: Position, color: Color) -> bool {
        self.piece_at(src.midpoint(dest))
            .is_some_and(|jumped| jumped.color() == color.other())
    }

    /// Whether moving `src` to `dest` is legal for `color`.
    ///
    /// Does not consider turn order. A simple step is illegal whenever
    /// `color` has a capture available anywhere on the board.
    #[must_use]
    pub fn is_valid_move(&self, src: Position, dest: Position, color: Color) -> bool {
        let Some(piece) = self.movable_piece(src, dest, color) else {
            return false;
        };
        let delta = dest - src;

        if piece.step_offsets().any(|o| o == delta) {
            return !self.can_jump(color);
        }
        if piece.jump_offsets().any(|o| o == delta) {
            return self.jumps_opponent(src, dest, color);
        }
        false
    }

    /// Whether `src -> dest` is a jump displacement for the piece at `src`.
    ///
    /// Purely geometric: occupancy of the destination and the jumped square
    /// is not checked.
    #[must_use]
    pub fn is_move_jump(&self, src: Position, dest: Position) -> bool {
        let delta = dest - src;
        self.piece_at(src)
            .is_some_and(|piece| piece.jump_offsets().any(|o| o == delta))
    }

    /// Whether the piece at `pos` has a capture available.
    ///
    /// Checks geometry and occupancy directly and never consults the
    /// forced-jump rule, so `can_jump` and `is_valid_move` can both call it.
    #[must_use]
    pub fn has_capture_from(&self, pos: Position) -> bool {
        let Some(piece) = self.piece_at(pos) else {
            return false;
        };
        let color = piece.color();
        piece.jump_offsets().any(|o| {
            let dest = pos + o;
            self.movable_piece(pos, dest, color).is_some() && self.jumps_opponent(pos, dest, color)
        })
    }

    /// Whether any piece of `color` can capture.
    #[must_use]
    pub fn can_jump(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(pos, _)| self.has_capture_from(pos))
    }

    /// Whether `color` has any legal move at all.
    #[must_use]
    pub fn can_move(&self, color: Color) -> bool {
        self.can_jump(color)
            || self.pieces_of(color).any(|(pos, piece)| {
                piece
                    .step_offsets()
                    .any(|o| self.movable_piece(pos, pos + o, color).is_some())
            })
    }

    // === Mutation ===

    /// Move a piece of `color` from `src` to `dest`.
    ///
    /// Returns false and leaves the board untouched if the move is not legal.
    /// On success, a jumped piece is captured and a piece landing on the
    /// first or last row is crowned.
    pub fn move_piece(&mut self, src: Position, dest: Position, color: Color) -> bool {
        if !self.is_valid_move(src, dest, color) {
            return false;
        }

        if self.is_move_jump(src, dest) {
            self.pieces.remove(&src.midpoint(dest));
        }
        let Some(mut piece) = self.pieces.remove(&src) else {
            return false;
        };
        if dest.row == 0 || dest.row == self.size - 1 {
            piece.promote();
        }
        self.pieces.insert(dest, piece);
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
