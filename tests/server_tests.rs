//! End-to-end tests over loopback TCP.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use rust_checkers::protocol::{GameStart, Message, TurnOrder, Verdict};
use rust_checkers::{BoardConfig, Color, Server, ServerConfig, ServerError};

struct Client {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

impl Client {
    fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).unwrap();
        stream.set_read_timeout(Some(Duration::from_secs(10))).unwrap();
        Self {
            writer: stream.try_clone().unwrap(),
            reader: BufReader::new(stream),
        }
    }

    fn send(&mut self, line: &str) {
        writeln!(self.writer, "{line}").unwrap();
        self.writer.flush().unwrap();
    }

    fn recv(&mut self) -> String {
        let mut line = String::new();
        self.reader.read_line(&mut line).unwrap();
        line.trim_end().to_string()
    }

    fn game_start(&mut self) -> GameStart {
        match self.recv().parse::<Message>().unwrap() {
            Message::GameStart(start) => start,
            other => panic!("expected GAMESTART, got {other}"),
        }
    }
}

fn one_session_server(board: BoardConfig) -> (SocketAddr, thread::JoinHandle<Result<(), ServerError>>) {
    let config = ServerConfig::default()
        .with_host("127.0.0.1")
        .with_ports(0..1)
        .with_board(board)
        .with_seed(42)
        .with_max_sessions(1);
    let server = Server::bind(config).unwrap();
    let addr = server.local_addr().unwrap();
    (addr, thread::spawn(move || server.serve()))
}

/// Connect two clients and return them as (first, second).
fn seated_pair(addr: SocketAddr) -> (Client, GameStart, Client, GameStart) {
    let mut a = Client::connect(addr);
    let mut b = Client::connect(addr);
    let start_a = a.game_start();
    let start_b = b.game_start();
    if start_a.turn == TurnOrder::First {
        (a, start_a, b, start_b)
    } else {
        (b, start_b, a, start_a)
    }
}

#[test]
fn test_game_start_assigns_opposite_seats() {
    let (addr, handle) = one_session_server(BoardConfig::default());
    let (mut first, first_start, mut second, second_start) = seated_pair(addr);

    assert_eq!(first_start.turn, TurnOrder::First);
    assert_eq!(first_start.color, Color::Red);
    assert_eq!(second_start.turn, TurnOrder::Second);
    assert_eq!(second_start.color, Color::Black);
    assert_eq!(first_start.board_size, 8);
    assert_eq!(second_start.board_rows, 3);

    first.send("QUIT:");
    assert_eq!(first.recv(), "GAMEOVER:Loss");
    assert_eq!(second.recv(), "GAMEOVER:Win");
    handle.join().unwrap().unwrap();
}

#[test]
fn test_full_exchange() {
    let (addr, handle) = one_session_server(BoardConfig::default());
    let (mut first, _, mut second, _) = seated_pair(addr);

    first.send("hello");
    assert_eq!(first.recv(), "REJECTED:Unparseable command");

    first.send("MOVE:a8");
    assert_eq!(first.recv(), "REJECTED:No path in move");

    first.send("JUMP:a3,b4");
    assert!(first.recv().starts_with("REJECTED:"));

    first.send("MOVE:a3,b4");
    assert_eq!(first.recv(), "ACCEPTED:Move accepted");
    assert_eq!(second.recv(), "MOVE:a3,b4");

    // Black cannot move a Red piece.
    second.send("MOVE:c3,d4");
    assert!(second.recv().starts_with("REJECTED:"));

    second.send("MOVE:b6,a5");
    assert_eq!(second.recv(), "ACCEPTED:Move accepted");
    assert_eq!(first.recv(), "MOVE:b6,a5");

    drop(first);
    assert_eq!(second.recv(), Message::GameOver(Verdict::Win).to_string());
    handle.join().unwrap().unwrap();
}

#[test]
fn test_configured_board_is_announced() {
    let (addr, handle) = one_session_server(BoardConfig::new(10, 4));
    let (mut first, first_start, second, second_start) = seated_pair(addr);

    assert_eq!(first_start.board_size, 10);
    assert_eq!(first_start.board_rows, 4);
    assert_eq!(second_start.board_size, 10);

    first.send("MOVE:b4,c5");
    assert_eq!(first.recv(), "ACCEPTED:Move accepted");

    drop(second);
    assert_eq!(first.recv(), "GAMEOVER:Win");
    handle.join().unwrap().unwrap();
}

#[test]
fn test_no_port_available() {
    let held = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = held.local_addr().unwrap().port();

    let config = ServerConfig::default()
        .with_host("127.0.0.1")
        .with_ports(port..port + 1);
    assert!(matches!(
        Server::bind(config),
        Err(ServerError::NoPortAvailable { .. })
    ));
}

#[test]
fn test_invalid_board_is_rejected_before_binding() {
    let config = ServerConfig::default()
        .with_host("127.0.0.1")
        .with_ports(0..1)
        .with_board(BoardConfig::new(4, 3));
    assert!(matches!(Server::bind(config), Err(ServerError::Config(_))));
}
