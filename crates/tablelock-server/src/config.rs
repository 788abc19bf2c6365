//! Server configuration.
//!
//! [`Args`] is parsed by clap from flags or `TABLELOCK_*` environment
//! variables and converted into a plain [`ServerConfig`]. The bare `PORT`
//! variable is honoured when no explicit port is given.

use std::time::Duration;

use clap::Parser;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default interval between expiry sweeps, in seconds.
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;

/// Table lock HTTP server.
#[derive(Debug, Parser)]
#[command(name = "tablelock-server", about = "Expiring exclusive table locks over HTTP")]
pub struct Args {
    /// Address to bind.
    #[arg(long, env = "TABLELOCK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on (falls back to PORT, then 3000).
    #[arg(short, long, env = "TABLELOCK_PORT")]
    pub port: Option<u16>,

    /// Seconds between background sweeps of expired locks.
    #[arg(
        long,
        env = "TABLELOCK_SWEEP_INTERVAL_SECS",
        default_value_t = DEFAULT_SWEEP_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sweep_interval_secs: u64,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "TABLELOCK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub sweep_interval: Duration,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Args {
    /// Resolves the port fallback chain using `fallback_port` as the value
    /// of the bare `PORT` variable.
    pub fn into_config(self, fallback_port: Option<&str>) -> ServerConfig {
        let port = self
            .port
            .or_else(|| fallback_port.and_then(|p| p.trim().parse().ok()))
            .unwrap_or(DEFAULT_PORT);

        ServerConfig {
            host: self.host,
            port,
            sweep_interval: Duration::from_secs(self.sweep_interval_secs),
            log_level: self.log_level,
        }
    }
}
