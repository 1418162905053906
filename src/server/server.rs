//! Accepting players and running sessions over TCP.

use std::io;
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::ops::Range;
use std::thread;
use std::time::Duration;

use tracing::{debug, info, info_span, warn};

use super::config::ServerConfig;
use crate::board::Board;
use crate::core::{BoardConfig, ConfigError, GameRng, Seat};
use crate::protocol::{GameStart, Message};
use crate::rules::GameResult;
use crate::session::{Player, Session};
use crate::transport::RemotePlayer;

/// Server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("could not bind any port in {ports:?} on {host}")]
    NoPortAvailable { host: String, ports: Range<u16> },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A bound listener that pairs up connections into sessions.
pub struct Server {
    listener: TcpListener,
    config: ServerConfig,
    rng: GameRng,
}

impl Server {
    /// Bind the first free port in the configured range.
    pub fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        config.validate()?;

        for port in config.ports.clone() {
            match TcpListener::bind((config.host.as_str(), port)) {
                Ok(listener) => {
                    let rng = GameRng::from_seed_or_entropy(config.seed);
                    info!(host = %config.host, port, seed = rng.seed(), "server listening");
                    return Ok(Self {
                        listener,
                        config,
                        rng,
                    });
                }
                Err(e) => debug!(port, %e, "port unavailable"),
            }
        }

        Err(ServerError::NoPortAvailable {
            host: config.host,
            ports: config.ports,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Wait for two connections, in arrival order.
    ///
    /// Failed accepts are logged and retried. The error is returned only
    /// after `MAX_ACCEPT_FAILURES` failures in a row.
    pub fn accept_pair(&self) -> io::Result<[TcpStream; 2]> {
        pair_connections(|| self.accept_one(), MAX_ACCEPT_FAILURES, ACCEPT_BACKOFF)
    }

    fn accept_one(&self) -> io::Result<TcpStream> {
        let (stream, addr) = self.listener.accept()?;
        info!(%addr, "player connected");
        Ok(stream)
    }

    /// Run one session per accepted pair, each on its own thread.
    ///
    /// Returns after `max_sessions` sessions have been started and have
    /// finished; runs forever when unbounded. Sessions already running are
    /// waited for even when accepting fails for good.
    pub fn serve(mut self) -> Result<(), ServerError> {
        let mut handles: Vec<thread::JoinHandle<()>> = Vec::new();
        let mut started = 0usize;

        while self.config.max_sessions.map_or(true, |max| started < max) {
            info!("waiting for 2 connections");
            let streams = match self.accept_pair() {
                Ok(streams) => streams,
                Err(e) => {
                    warn!(%e, running = handles.len(), "giving up on accepting connections");
                    join_sessions(handles);
                    return Err(e.into());
                }
            };
            started += 1;

            let board = self.config.board;
            let rng = self.rng.fork();
            let id = started;
            handles.retain(|handle| !handle.is_finished());
            handles.push(thread::spawn(move || {
                let _span = info_span!("session", id).entered();
                if let Err(e) = run_session(streams, &board, rng) {
                    warn!(%e, "session failed");
                }
            }));
        }

        join_sessions(handles);
        Ok(())
    }
}

/// Consecutive accept failures tolerated before `serve` gives up.
const MAX_ACCEPT_FAILURES: u32 = 32;

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Pair up connections produced by `accept`.
///
/// A connection already waiting for a partner survives failed accepts.
fn pair_connections<S>(
    mut accept: impl FnMut() -> io::Result<S>,
    max_failures: u32,
    backoff: Duration,
) -> io::Result<[S; 2]> {
    let mut waiting = None;
    let mut failures = 0;

    loop {
        match accept() {
            Ok(stream) => {
                failures = 0;
                match waiting.take() {
                    None => waiting = Some(stream),
                    Some(first) => return Ok([first, stream]),
                }
            }
            Err(e) => {
                failures += 1;
                if failures >= max_failures {
                    return Err(e);
                }
                warn!(%e, failures, "accept failed");
                if e.kind() != io::ErrorKind::Interrupted {
                    thread::sleep(backoff);
                }
            }
        }
    }
}

fn join_sessions(handles: Vec<thread::JoinHandle<()>>) {
    for handle in handles {
        if handle.join().is_err() {
            warn!("session thread panicked");
        }
    }
}

/// Seat two connections at a fresh board and play the game out.
///
/// Seating is shuffled: the first seat plays Red and moves first. Both
/// connections are shut down when the game ends.
pub fn run_session(
    mut streams: [TcpStream; 2],
    board: &BoardConfig,
    mut rng: GameRng,
) -> Result<GameResult, ServerError> {
    rng.shuffle(&mut streams);
    let initial = Board::new(board)?;

    let [first, second] = streams;
    let mut players = [
        RemotePlayer::from_tcp(Seat::FIRST.color(), first)?,
        RemotePlayer::from_tcp(Seat::SECOND.color(), second)?,
    ];
    for (seat, player) in Seat::ALL.into_iter().zip(players.iter_mut()) {
        player.notify(&Message::GameStart(GameStart::for_seat(seat, board)));
    }

    let mut session = Session::new(initial, players);
    debug!("\n{}", session.board());
    let result = session.play();

    for player in session.into_players() {
        // The peer may already have closed its end.
        let _ = player.into_writer().shutdown(Shutdown::Both);
    }
    Ok(result)
}
