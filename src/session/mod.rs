//! Sessions: one board, two players, strictly alternating turns.
//!
//! ## Turn flow
//!
//! 1. Ask the seat to move for a command.
//! 2. `QUIT` or a disconnect ends the game in the opponent's favour.
//! 3. `MOVE:<path>` is played on a scratch board; on success the scratch
//!    board becomes the live board, the mover gets `ACCEPTED` and the
//!    opponent gets the move verbatim. Otherwise the mover gets `REJECTED`
//!    and is asked again.
//! 4. After an accepted move, if the opponent cannot move the mover wins;
//!    otherwise the turn passes.

pub mod player;
#[allow(clippy::module_inception)]
pub mod session;

pub use player::{Player, ScriptedPlayer};
pub use session::{Session, SessionState};
