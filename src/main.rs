use std::path::PathBuf;

use fedauth::config::Configuration;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let path = std::env::var("CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_default();
    let (config, config_error) = match Configuration::default().path(path).read() {
        Ok(config) => (config, None),
        Err(err) => (Configuration::default(), Some(err)),
    };

    let guard = fedauth::telemetry::init(&config)?;
    if let Some(err) = config_error {
        tracing::error!(error = %err, "`config.yaml` not loaded, using defaults");
    }

    let metrics = if config.metrics_enabled() {
        Some(fedauth::telemetry::setup_metrics_recorder()?)
    } else {
        None
    };

    let port = config.port;
    let state = fedauth::initialize_state(config, metrics).await?;

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(%port, "server started");

    axum::serve(listener, fedauth::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    guard.shutdown();

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(err) => tracing::error!(%err, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutting down");
}
