//! The checkers board: piece placement, move legality, and move execution.
//!
//! `Board` owns the sparse position -> piece map and every geometric rule:
//! - bounds and dark-square checks
//! - forced jumps (no simple steps while a capture is available)
//! - captures and back-rank promotion
//!
//! Turn order is not enforced here; that is the session's job.

mod render;
mod state;

pub use state::Board;
