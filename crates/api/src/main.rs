use std::net::SocketAddr;

use anyhow::Context;
use tracing::{error, info, warn};

use usersvc_api::app::{AppServices, build_app};
use usersvc_infra::{AppConfig, db};

#[tokio::main]
async fn main() {
    usersvc_observability::init();

    if let Err(err) = run().await {
        let msg = format!("{err:#}");
        error!(error = %msg, "fatal");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    info!(db = %config.database.redacted_url(), http_port = config.http_port, "starting");

    let pool = db::connect(&config.database)
        .await
        .context("db ping failed")?;

    let app = build_app(AppServices::postgres(pool.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    info!("shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
