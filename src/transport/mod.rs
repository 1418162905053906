//! Byte-stream plumbing between sessions and remote players.
//!
//! - `LineReader` / `LineWriter`: newline framing over any `Read` / `Write`
//! - `RemotePlayer`: the `Player` capability over such a pair, typically
//!   the two halves of a `TcpStream`

pub mod line;
pub mod remote;

pub use line::{LineReader, LineWriter, MAX_LINE_LEN};
pub use remote::RemotePlayer;
