//! `checkers-server`: host checkers games over TCP.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rust_checkers::server::{Server, ServerConfig};

#[derive(Parser)]
#[command(name = "checkers-server")]
#[command(about = "Pair up players and referee checkers games")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind
    #[arg(long)]
    host: Option<String>,

    /// First port to try
    #[arg(short, long)]
    port: Option<u16>,

    /// Number of consecutive ports to try
    #[arg(long, default_value_t = 10)]
    port_attempts: u16,

    /// Board size
    #[arg(long)]
    board_size: Option<usize>,

    /// Starting rows per side
    #[arg(long)]
    board_rows: Option<usize>,

    /// Seed for seat shuffling
    #[arg(long)]
    seed: Option<u64>,

    /// Exit after this many games
    #[arg(long)]
    games: Option<usize>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServerConfig::default(),
    };

    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_ports(port..port.saturating_add(cli.port_attempts));
    }
    if let Some(size) = cli.board_size {
        config.board = config.board.with_size(size);
    }
    if let Some(rows) = cli.board_rows {
        config.board = config.board.with_starting_rows(rows);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(games) = cli.games {
        config = config.with_max_sessions(games);
    }

    let server = Server::bind(config).context("starting server")?;
    server.serve().context("serving games")?;
    Ok(())
}
