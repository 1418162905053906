//! The player capability a session drives.
//!
//! A session never talks to sockets or keyboards directly. It asks a
//! `Player` for the next command and hands it notifications; adapters decide
//! where those come from and go to.

use std::collections::VecDeque;

use crate::protocol::{parse_command, Command, Message, ProtocolError};

/// A seated participant.
pub trait Player {
    /// Block until the player's next command arrives.
    ///
    /// `None` means the player is gone (disconnect) and forfeits.
    fn next_command(&mut self) -> Option<Command>;

    /// Deliver one notification line to the player.
    fn notify(&mut self, message: &Message);
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn next_command(&mut self) -> Option<Command> {
        (**self).next_command()
    }

    fn notify(&mut self, message: &Message) {
        (**self).notify(message);
    }
}

impl<P: Player + ?Sized> Player for &mut P {
    fn next_command(&mut self) -> Option<Command> {
        (**self).next_command()
    }

    fn notify(&mut self, message: &Message) {
        (**self).notify(message);
    }
}

/// An in-memory player that replays queued commands and records every
/// notification it receives. Running out of commands acts as a disconnect.
///
/// ```
/// use rust_checkers::session::{Player, ScriptedPlayer};
/// use rust_checkers::protocol::Message;
///
/// let mut player = ScriptedPlayer::from_lines(["MOVE:b6,a5"]).unwrap();
/// assert_eq!(player.next_command().unwrap().payload, "b6,a5");
/// assert!(player.next_command().is_none());
///
/// player.notify(&Message::Accepted("ok".into()));
/// assert_eq!(player.received().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedPlayer {
    commands: VecDeque<Command>,
    received: Vec<Message>,
}

impl ScriptedPlayer {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            received: Vec::new(),
        }
    }

    /// Build from raw protocol lines.
    pub fn from_lines<S: AsRef<str>>(
        lines: impl IntoIterator<Item = S>,
    ) -> Result<Self, ProtocolError> {
        let commands = lines
            .into_iter()
            .map(|line| parse_command(line.as_ref()))
            .collect::<Result<VecDeque<_>, _>>()?;
        Ok(Self {
            commands,
            received: Vec::new(),
        })
    }

    /// Queue another command.
    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Notifications received so far, oldest first.
    #[must_use]
    pub fn received(&self) -> &[Message] {
        &self.received
    }

    #[must_use]
    pub fn last_received(&self) -> Option<&Message> {
        self.received.last()
    }

    /// Commands not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl Player for ScriptedPlayer {
    fn next_command(&mut self) -> Option<Command> {
        self.commands.pop_front()
    }

    fn notify(&mut self, message: &Message) {
        self.received.push(message.clone());
    }
}
