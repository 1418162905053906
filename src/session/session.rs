//! Turn state machine for one board and two players.

use tracing::{debug, info};

use crate::board::Board;
use crate::core::{Color, Seat, SeatMap};
use crate::protocol::{parse_path, Message, Verdict};
use crate::rules::{play_path, EndReason, GameResult, Rejection};

use super::player::Player;

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for a command from the seat whose turn it is.
    AwaitingCommand(Seat),
    /// Finished. No further turns are taken.
    GameOver(GameResult),
}

/// One game: a board plus the two players seated at it.
///
/// Seat 0 plays Red and moves first. Each command is validated against a
/// scratch copy of the board, so a rejected command never changes the
/// live board.
pub struct Session<P> {
    board: Board,
    players: SeatMap<P>,
    state: SessionState,
    moves_played: u32,
}

impl<P: Player> Session<P> {
    /// Create a session with players in seating order.
    pub fn new(board: Board, players: [P; 2]) -> Self {
        Self {
            board,
            players: SeatMap::new(players),
            state: SessionState::AwaitingCommand(Seat::FIRST),
            moves_played: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The seat to move, or `None` once the game is over.
    #[must_use]
    pub fn turn(&self) -> Option<Seat> {
        match self.state {
            SessionState::AwaitingCommand(seat) => Some(seat),
            SessionState::GameOver(_) => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            SessionState::AwaitingCommand(_) => None,
            SessionState::GameOver(result) => Some(result),
        }
    }

    /// Number of accepted moves so far.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &P {
        &self.players[seat]
    }

    /// Consume the session, returning the players in seating order.
    pub fn into_players(self) -> [P; 2] {
        self.players.into_inner()
    }

    /// Take one full turn for the seat to move.
    ///
    /// Keeps asking the same player until a move is accepted or the game
    /// ends. Returns true while the game continues.
    pub fn take_turn(&mut self) -> bool {
        let SessionState::AwaitingCommand(seat) = self.state else {
            return false;
        };
        let color = seat.color();

        loop {
            let (mover, opponent) = self.players.pair_mut(seat);

            let Some(command) = mover.next_command() else {
                info!(%seat, %color, "player disconnected");
                opponent.notify(&Message::GameOver(Verdict::Win));
                return self.finish(GameResult::new(seat.other(), EndReason::Disconnect));
            };

            match command.name.as_str() {
                "QUIT" => {
                    info!(%seat, %color, "player forfeits");
                    mover.notify(&Message::GameOver(Verdict::Loss));
                    opponent.notify(&Message::GameOver(Verdict::Win));
                    return self.finish(GameResult::new(seat.other(), EndReason::Quit));
                }
                "MOVE" => match self.attempt_move(&command.payload, color) {
                    Ok(board) => {
                        self.board = board;
                        let (mover, opponent) = self.players.pair_mut(seat);
                        mover.notify(&Message::Accepted("Move accepted".to_string()));
                        opponent.notify(&Message::Move(command.payload));
                        break;
                    }
                    Err(rejection) => {
                        debug!(%seat, %color, %rejection, "move rejected");
                        self.players[seat].notify(&Message::Rejected(rejection.to_string()));
                    }
                },
                other => {
                    let rejection = Rejection::UnknownCommand(other.to_string());
                    debug!(%seat, %rejection, "command rejected");
                    mover.notify(&Message::Rejected(rejection.to_string()));
                }
            }
        }

        self.moves_played += 1;
        debug!(moves = self.moves_played, "\n{}", self.board);

        if !self.board.can_move(color.other()) {
            let (mover, opponent) = self.players.pair_mut(seat);
            mover.notify(&Message::GameOver(Verdict::Win));
            opponent.notify(&Message::GameOver(Verdict::Loss));
            return self.finish(GameResult::new(seat, EndReason::NoMoves));
        }

        self.state = SessionState::AwaitingCommand(seat.other());
        true
    }

    /// Take turns until the game is over.
    pub fn play(&mut self) -> GameResult {
        loop {
            if let SessionState::GameOver(result) = self.state {
                return result;
            }
            self.take_turn();
        }
    }

    /// Parse and validate a `MOVE` payload against a scratch board.
    fn attempt_move(&self, payload: &str, color: Color) -> Result<Board, Rejection> {
        let path = parse_path(payload, self.board.size())
            .map_err(|e| Rejection::BadPosition(e.0))?;
        play_path(&self.board, &path, color)
    }

    fn finish(&mut self, result: GameResult) -> bool {
        info!(
            winner = %result.winner,
            reason = ?result.reason,
            moves = self.moves_played,
            "game over"
        );
        self.state = SessionState::GameOver(result);
        false
    }
}
