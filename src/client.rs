//! Terminal client logic.
//!
//! The client prints every line from the server. After each line it either
//! waits for more, relays one line typed by the user, or stops.

use std::io::{self, BufRead, Read, Write};

use crate::protocol::{Message, TurnOrder};
use crate::transport::{LineReader, LineWriter};

/// What the client does after showing a server line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientStep {
    /// Read another server line before answering.
    Wait,
    /// Send one line of user input.
    Respond,
    /// The game is over.
    Stop,
}

/// Decide the next step after receiving `line`.
///
/// Going second and `ACCEPTED` both mean the opponent speaks next. Lines
/// the client does not understand are shown and answered like any other.
#[must_use]
pub fn next_step(line: &str) -> ClientStep {
    match line.parse::<Message>() {
        Ok(Message::GameStart(start)) if start.turn == TurnOrder::Second => ClientStep::Wait,
        Ok(Message::Accepted(_)) => ClientStep::Wait,
        Ok(Message::GameOver(_)) => ClientStep::Stop,
        _ => ClientStep::Respond,
    }
}

/// Relay between a server connection and a user's terminal until the game
/// ends or either side closes.
pub fn run<R, W, I, O>(server: R, to_server: W, mut input: I, mut output: O) -> io::Result<()>
where
    R: Read,
    W: Write,
    I: BufRead,
    O: Write,
{
    let mut reader = LineReader::new(server);
    let mut writer = LineWriter::new(to_server);

    while let Some(line) = reader.read_line()? {
        writeln!(output, "{line}")?;
        output.flush()?;

        match next_step(&line) {
            ClientStep::Wait => continue,
            ClientStep::Stop => return Ok(()),
            ClientStep::Respond => {}
        }

        let mut reply = String::new();
        if input.read_line(&mut reply)? == 0 {
            return Ok(());
        }
        writer.write_line(reply.trim_end_matches(['\r', '\n']))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_next_step() {
        assert_eq!(
            next_step("GAMESTART:board_size=8,board_rows=3,turn=second,color=b"),
            ClientStep::Wait
        );
        assert_eq!(
            next_step("GAMESTART:board_size=8,board_rows=3,turn=first,color=r"),
            ClientStep::Respond
        );
        assert_eq!(next_step("ACCEPTED:Move accepted"), ClientStep::Wait);
        assert_eq!(next_step("REJECTED:No path in move"), ClientStep::Respond);
        assert_eq!(next_step("MOVE:b6,a5"), ClientStep::Respond);
        assert_eq!(next_step("GAMEOVER:Win"), ClientStep::Stop);
        assert_eq!(next_step("???"), ClientStep::Respond);
    }

    #[test]
    fn test_run_relays_input() {
        let server = Cursor::new(
            "GAMESTART:board_size=8,board_rows=3,turn=first,color=r\n\
             ACCEPTED:Move accepted\n\
             MOVE:c6,d5\n\
             GAMEOVER:Loss\n",
        );
        let mut sent = Vec::new();
        let mut shown = Vec::new();
        let input = Cursor::new("b3,a4\r\nQUIT:\n");

        run(server, &mut sent, input, &mut shown).unwrap();

        assert_eq!(String::from_utf8(sent).unwrap(), "b3,a4\nQUIT:\n");
        let shown = String::from_utf8(shown).unwrap();
        assert_eq!(shown.lines().count(), 4);
        assert!(shown.ends_with("GAMEOVER:Loss\n"));
    }

    #[test]
    fn test_run_stops_when_input_ends() {
        let server = Cursor::new("GAMESTART:board_size=8,board_rows=3,turn=first,color=r\n");
        let mut sent = Vec::new();
        run(server, &mut sent, Cursor::new(""), io::sink()).unwrap();
        assert!(sent.is_empty());
    }
}
