use crate::model::app_state::AppState;
use crate::model::configuration::Configuration;
use crate::router::build_router;
use crate::shared::util::{initialize_logging, shutdown_signal};
use anyhow::Context;

mod controller;
mod middleware;
mod model;
mod router;
mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = Configuration::default();
    initialize_logging(&configuration.log_level)?;

    tracing::debug!("Cross-origin policy: {:?}", &configuration.cors);
    let state = AppState::new(configuration.cors.clone());
    let app = build_router(state)?;

    let listener = tokio::net::TcpListener::bind(&configuration.server_bind_point)
        .await
        .with_context(|| format!("Failed to bind to {}", &configuration.server_bind_point))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down.");
    Ok(())
}
