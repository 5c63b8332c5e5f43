use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use hindo_config::Config;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

use self::state::AppState;

/// Serve a searchable Japanese word-frequency table
#[derive(Parser)]
#[command(name = "hindo")]
struct Args {
    /// Frequency CSV, most frequent word first
    #[arg(long)]
    frequency_file: Option<PathBuf>,

    /// Known-vocabulary list, one word per line
    #[arg(long)]
    vocab_file: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hindo=info,tower_http=info".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut config = Config::new();
    if let Some(path) = args.frequency_file {
        config.data.frequency_file = path;
    }
    if let Some(path) = args.vocab_file {
        config.data.vocab_file = path;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // The table is built exactly once, before the listener binds; every
    // request reads the same immutable copy.
    let table = hindo_core::load(&config.data.frequency_file, &config.data.vocab_file)?;
    let state = AppState::new(table);

    let app = routes::create_router(state);
    let addr = config.server.addr();

    tracing::info!("Listening on http://{addr}");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    tracing::info!("Shutdown requested");
}
