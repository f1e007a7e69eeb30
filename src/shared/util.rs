use std::str::FromStr;
use tokio::signal;
use tracing::Level;

pub fn parse_log_level(log_level: &str) -> Option<Level> {
    Level::from_str(log_level.trim()).ok()
}

pub fn initialize_logging(log_level: &str) -> anyhow::Result<()> {
    let level = parse_log_level(log_level);

    tracing_subscriber::fmt()
        .with_max_level(level.unwrap_or(Level::INFO))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if level.is_none() {
        tracing::warn!("Unknown log level {}, falling back to INFO.", log_level);
    }
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down."),
    }
}
