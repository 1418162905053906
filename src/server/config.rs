//! Server configuration.
//!
//! Loaded from TOML, with every field optional:
//!
//! ```toml
//! host = "0.0.0.0"
//! ports = { start = 8080, end = 8090 }
//! seed = 42
//! max_sessions = 1
//!
//! [board]
//! size = 8
//! starting_rows = 3
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::Path;

use super::server::ServerError;
use crate::core::BoardConfig;

/// Where to listen and what kind of game to host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind. `localhost` only accepts local connections.
    pub host: String,

    /// Ports tried in order; the first free one is used.
    pub ports: Range<u16>,

    /// Board used for every session.
    pub board: BoardConfig,

    /// Seed for seat shuffling. Random when unset.
    pub seed: Option<u64>,

    /// Stop accepting after this many sessions. Unbounded when unset.
    pub max_sessions: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            ports: 8080..8090,
            board: BoardConfig::default(),
            seed: None,
            max_sessions: None,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ServerError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn with_ports(mut self, ports: Range<u16>) -> Self {
        self.ports = ports;
        self
    }

    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_max_sessions(mut self, max: usize) -> Self {
        self.max_sessions = Some(max);
        self
    }

    /// Check the board layout and that at least one port will be tried.
    pub fn validate(&self) -> Result<(), ServerError> {
        self.board.validate()?;
        if self.ports.is_empty() {
            return Err(ServerError::NoPortAvailable {
                host: self.host.clone(),
                ports: self.ports.clone(),
            });
        }
        Ok(())
    }
}
