//! `checkers-client`: play checkers from a terminal.

use std::io;
use std::net::TcpStream;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "checkers-client")]
#[command(about = "Terminal checkers client")]
struct Cli {
    #[arg(long, default_value = "localhost")]
    hostname: String,

    #[arg(short, long, default_value_t = 8080)]
    port: u16,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let stream = TcpStream::connect((cli.hostname.as_str(), cli.port))
        .with_context(|| format!("connecting to {}:{}", cli.hostname, cli.port))?;
    tracing::info!(host = %cli.hostname, port = cli.port, "connected");

    let writer = stream.try_clone().context("cloning connection")?;
    rust_checkers::client::run(stream, writer, io::stdin().lock(), io::stdout())
        .context("connection lost")?;
    Ok(())
}
