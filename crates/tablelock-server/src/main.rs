//! Binary entrypoint for the tablelock HTTP server.
//!
//! Configuration comes from flags or environment variables, see
//! `tablelock-server --help`. `RUST_LOG` overrides `--log-level`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tablelock_server::config::Args;
use tablelock_server::server;

#[tokio::main]
async fn main() {
    let config = Args::parse().into_config(std::env::var("PORT").ok().as_deref());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = server::run(config).await {
        tracing::error!("{err}");
        std::process::exit(1);
    }

    tracing::info!("process terminated");
}
