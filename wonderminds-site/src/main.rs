//! WonderMinds site server
//!
//! Configuration is read from `/etc/wonderminds/config.toml`, the user config
//! directory, `./config.toml` and `WONDERMINDS_*` environment variables.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use wonderminds_site::{build_router, config::SiteConfig, observability, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SiteConfig::load().context("failed to load configuration")?;
    observability::init(config.server.environment)?;

    let address = config.server.bind_address();
    info!(
        environment = ?config.server.environment,
        mail_configured = config.mail.is_configured(),
        "Starting WonderMinds site"
    );

    let state = AppState::from_config(config);
    let appointments = state.appointments().clone();
    let app = build_router(state);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    appointments.flush().await;
    info!("Shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
