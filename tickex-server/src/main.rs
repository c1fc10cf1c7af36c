//! Tickex verification server.
//!
//! A deliberately tiny axum binary: resolve configuration, build the
//! router, serve plain HTTP. The interesting logic lives in
//! `tickex-core`; the client lives in `tickex-scanner`.

use anyhow::Context;
use clap::Parser;
use tickex_server::{AppState, Config, create_app};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "tickex-server")]
#[command(about = "Ticket verification endpoint for the Tickex demo")]
struct Cli {
    /// Server port (overrides environment)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides environment)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file_loaded = dotenvy::dotenv().is_ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_file_loaded {
        info!("loaded .env file");
    }

    let mut config = Config::from_env();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }

    let addr = config
        .server
        .socket_addr()
        .context("failed to resolve bind address")?;
    let state = AppState::new(config);
    let app = create_app(state);

    info!("Starting Tickex verification server on {addr}");
    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind server address")?;
    axum::serve(listener, app)
        .await
        .context("server terminated")?;

    Ok(())
}
