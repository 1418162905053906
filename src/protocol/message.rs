//! Typed protocol messages and their wire form.
//!
//! | Line                                                      | Direction        |
//! |-----------------------------------------------------------|------------------|
//! | `GAMESTART:board_size=8,board_rows=3,turn=first,color=r`  | server -> player |
//! | `MOVE:b6,a5`                                              | both             |
//! | `ACCEPTED:<text>` / `REJECTED:<text>`                     | server -> mover  |
//! | `GAMEOVER:Win` / `GAMEOVER:Loss`                          | server -> player |
//! | `QUIT:`                                                   | player -> server |

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::command::{parse_command, ProtocolError};
use crate::core::{BoardConfig, Color, ParsePositionError, Position, Seat};

/// Positions of one `MOVE` command, in order.
pub type MovePath = SmallVec<[Position; 4]>;

/// Whether a player moves first or second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOrder {
    First,
    Second,
}

impl TurnOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TurnOrder::First => "first",
            TurnOrder::Second => "second",
        }
    }
}

/// Final result as seen by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Win,
    Loss,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Verdict::Win => "Win",
            Verdict::Loss => "Loss",
        }
    }
}

/// Session parameters sent to each player before the first turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameStart {
    pub board_size: usize,
    pub board_rows: usize,
    pub turn: TurnOrder,
    pub color: Color,
}

impl GameStart {
    /// The announcement for whoever sits in `seat`.
    #[must_use]
    pub fn for_seat(seat: Seat, board: &BoardConfig) -> Self {
        let turn = if seat == Seat::FIRST {
            TurnOrder::First
        } else {
            TurnOrder::Second
        };
        Self {
            board_size: board.size,
            board_rows: board.starting_rows,
            turn,
            color: seat.color(),
        }
    }
}

impl fmt::Display for GameStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "board_size={},board_rows={},turn={},color={}",
            self.board_size,
            self.board_rows,
            self.turn.as_str(),
            self.color
        )
    }
}

impl FromStr for GameStart {
    type Err = ProtocolError;

    /// Parse `key=value` pairs in any order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields: FxHashMap<&str, &str> = FxHashMap::default();
        for part in s.split(',') {
            let (key, value) = part.split_once('=').ok_or_else(|| ProtocolError::InvalidField {
                field: part.to_string(),
                value: String::new(),
            })?;
            fields.insert(key.trim(), value.trim());
        }

        let field = |name: &'static str| {
            fields
                .get(name)
                .copied()
                .ok_or(ProtocolError::MissingField(name))
        };
        let invalid = |name: &str, value: &str| ProtocolError::InvalidField {
            field: name.to_string(),
            value: value.to_string(),
        };

        let size = field("board_size")?;
        let rows = field("board_rows")?;
        let turn = field("turn")?;
        let color = field("color")?;

        Ok(Self {
            board_size: size.parse().map_err(|_| invalid("board_size", size))?,
            board_rows: rows.parse().map_err(|_| invalid("board_rows", rows))?,
            turn: match turn {
                "first" => TurnOrder::First,
                "second" => TurnOrder::Second,
                other => return Err(invalid("turn", other)),
            },
            color: color.parse().map_err(|_| invalid("color", color))?,
        })
    }
}

/// Every message the protocol carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    GameStart(GameStart),
    /// A move path, kept exactly as the mover wrote it.
    Move(String),
    Accepted(String),
    Rejected(String),
    GameOver(Verdict),
    Quit,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::GameStart(start) => write!(f, "GAMESTART:{start}"),
            Message::Move(path) => write!(f, "MOVE:{path}"),
            Message::Accepted(text) => write!(f, "ACCEPTED:{text}"),
            Message::Rejected(text) => write!(f, "REJECTED:{text}"),
            Message::GameOver(verdict) => write!(f, "GAMEOVER:{}", verdict.as_str()),
            Message::Quit => write!(f, "QUIT:"),
        }
    }
}

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let command = parse_command(line)?;
        let payload = command.payload;
        match command.name.as_str() {
            "GAMESTART" => Ok(Message::GameStart(payload.parse()?)),
            "MOVE" => Ok(Message::Move(payload)),
            "ACCEPTED" => Ok(Message::Accepted(payload)),
            "REJECTED" => Ok(Message::Rejected(payload)),
            "GAMEOVER" => match payload.as_str() {
                "Win" => Ok(Message::GameOver(Verdict::Win)),
                "Loss" => Ok(Message::GameOver(Verdict::Loss)),
                _ => Err(ProtocolError::InvalidField {
                    field: "GAMEOVER".to_string(),
                    value: payload,
                }),
            },
            "QUIT" => Ok(Message::Quit),
            _ => Err(ProtocolError::UnknownCommand(command.name)),
        }
    }
}

/// Parse a comma-separated move path such as `b6,d4,f2`.
///
/// An empty payload yields an empty path. Positions are not bounds-checked.
pub fn parse_path(payload: &str, size: i32) -> Result<MovePath, ParsePositionError> {
    if payload.trim().is_empty() {
        return Ok(MovePath::new());
    }
    payload
        .split(',')
        .map(|part| Position::parse_notation(part, size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_start_wire_form() {
        let start = GameStart::for_seat(Seat::FIRST, &BoardConfig::default());
        assert_eq!(
            Message::GameStart(start).to_string(),
            "GAMESTART:board_size=8,board_rows=3,turn=first,color=r"
        );

        let second = GameStart::for_seat(Seat::SECOND, &BoardConfig::default());
        assert_eq!(second.turn, TurnOrder::Second);
        assert_eq!(second.color, Color::Black);
    }

    #[test]
    fn test_game_start_fields_any_order() {
        let start: GameStart = "color=b, turn=second,board_rows=2,board_size=6".parse().unwrap();
        assert_eq!(
            start,
            GameStart {
                board_size: 6,
                board_rows: 2,
                turn: TurnOrder::Second,
                color: Color::Black,
            }
        );
    }

    #[test]
    fn test_game_start_errors() {
        assert_eq!(
            "board_size=8,board_rows=3,turn=first".parse::<GameStart>(),
            Err(ProtocolError::MissingField("color"))
        );
        assert!(matches!(
            "board_size=x,board_rows=3,turn=first,color=r".parse::<GameStart>(),
            Err(ProtocolError::InvalidField { .. })
        ));
        assert!("board_size".parse::<GameStart>().is_err());
    }

    #[test]
    fn test_message_parse() {
        assert_eq!("MOVE:b6,a5".parse::<Message>(), Ok(Message::Move("b6,a5".into())));
        assert_eq!("GAMEOVER:Loss".parse::<Message>(), Ok(Message::GameOver(Verdict::Loss)));
        assert_eq!("QUIT:".parse::<Message>(), Ok(Message::Quit));
        assert_eq!(
            "HELLO:x".parse::<Message>(),
            Err(ProtocolError::UnknownCommand("HELLO".into()))
        );
        assert!("GAMEOVER:Draw".parse::<Message>().is_err());
    }

    #[test]
    fn test_parse_path() {
        let path = parse_path("b6, a5 ,c3", 8).unwrap();
        assert_eq!(
            path.as_slice(),
            &[Position::new(2, 1), Position::new(3, 0), Position::new(5, 2)]
        );
        assert!(parse_path("", 8).unwrap().is_empty());
        assert_eq!(parse_path("a8", 8).unwrap().len(), 1);
        assert!(parse_path("a8,,b7", 8).is_err());
    }
}
