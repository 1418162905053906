//! A player on the other end of a line-oriented connection.

use std::io::{self, Read, Write};
use std::net::TcpStream;

use tracing::{debug, warn};

use super::line::{LineReader, LineWriter};
use crate::core::Color;
use crate::protocol::{parse_command, Command, Message};
use crate::rules::Rejection;
use crate::session::Player;

/// Adapts a line reader/writer pair to the `Player` capability.
///
/// Lines that cannot be parsed as `COMMAND:payload` are answered with
/// `REJECTED` right here and never reach the session. End of stream or a
/// read error counts as a disconnect.
pub struct RemotePlayer<R, W> {
    color: Color,
    reader: LineReader<R>,
    writer: LineWriter<W>,
}

impl<R: Read, W: Write> RemotePlayer<R, W> {
    pub fn new(color: Color, reader: R, writer: W) -> Self {
        Self {
            color,
            reader: LineReader::new(reader),
            writer: LineWriter::new(writer),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Send a line, logging instead of failing if the peer is gone.
    fn send(&mut self, line: &str) {
        if let Err(e) = self.writer.write_line(line) {
            warn!(color = %self.color, %e, "failed to write to player");
        }
    }

    fn reject_unparseable(&mut self) {
        let reply = Message::Rejected(Rejection::Unparseable.to_string());
        self.send(&reply.to_string());
    }

    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}

impl RemotePlayer<TcpStream, TcpStream> {
    /// Wrap a TCP connection, using a cloned handle for writing.
    pub fn from_tcp(color: Color, stream: TcpStream) -> io::Result<Self> {
        let writer = stream.try_clone()?;
        Ok(Self::new(color, stream, writer))
    }
}

impl<R: Read, W: Write> Player for RemotePlayer<R, W> {
    fn next_command(&mut self) -> Option<Command> {
        loop {
            let parsed = match self.reader.read_line() {
                Ok(Some(line)) => parse_command(&line).map_err(|e| e.to_string()),
                Ok(None) => return None,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(e.to_string()),
                Err(e) => {
                    warn!(color = %self.color, %e, "read failed; treating as disconnect");
                    return None;
                }
            };

            match parsed {
                Ok(command) => return Some(command),
                Err(e) => {
                    debug!(color = %self.color, error = %e, "unparseable line");
                    self.reject_unparseable();
                }
            }
        }
    }

    fn notify(&mut self, message: &Message) {
        self.send(&message.to_string());
    }
}
