use super::open_db;
use crate::api::{router, AppState};
use crate::libs::clock::SystemClock;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind; defaults to the configured host
    #[arg(long, env = "TODO_LIST_HOST")]
    host: Option<String>,

    /// Port to bind; defaults to the configured port
    #[arg(short, long, env = "TODO_LIST_PORT")]
    port: Option<u16>,

    /// Path to the SQLite database file
    #[arg(long, env = "TODO_LIST_DB")]
    db: Option<PathBuf>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = Config::read()?;
    let host = args.host.unwrap_or_else(|| config.host());
    let port = args.port.unwrap_or_else(|| config.port());
    let db = open_db(args.db, &config)?;

    let app = router(AppState::new(db, Arc::new(SystemClock)));
    let listener = TcpListener::bind((host.as_str(), port)).await?;
    msg_success!(Message::ServerStarting(listener.local_addr()?.to_string()));

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    msg_info!(Message::ServerStopped);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
        return;
    }
    tracing::info!("{}", Message::ShutdownSignalReceived);
}
