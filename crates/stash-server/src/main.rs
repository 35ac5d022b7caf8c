mod config;

use std::net::SocketAddr;

use tracing::{info, warn};

use stash_api::state::AppStateInner;
use stash_db::Database;
use stash_db::seed::seed_demo_data;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "stash_server=debug,stash_api=debug,stash_db=debug,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;
    let db = Database::open(&config.db_path)?;

    match std::env::args().nth(1).as_deref() {
        None | Some("serve") => {}
        Some("seed") => {
            seed_demo_data(&db)?;
            return Ok(());
        }
        Some(other) => anyhow::bail!("unknown command '{}' (expected 'serve' or 'seed')", other),
    }

    if config.seed_on_start {
        // Failures are logged and rolled back by the seed routine; serve anyway.
        let _ = seed_demo_data(&db);
    }

    let app = stash_api::router::build(AppStateInner::new(db));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Stash server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
