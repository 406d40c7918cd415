//! qplan-web demo server entry point.
//!
//! Starts the Axum server with the WebSocket echo endpoint and the work
//! endpoint on one port.

use std::sync::Arc;
use std::time::Duration;

use qplan_web::app::build_app_with_timeout;
use qplan_web::app_state::AppState;
use qplan_web::config::ServerConfig;
use qplan_web::domain::WorkBoard;
use qplan_web::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init().map_err(|e| anyhow::anyhow!(e))?;

    let config = ServerConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting qplan-web");

    let board = match &config.work_data_path {
        Some(path) => WorkBoard::from_file(path)?,
        None => {
            tracing::warn!("WORK_DATA_PATH not set; serving an empty work board");
            WorkBoard::default()
        }
    };

    let app = build_app_with_timeout(
        AppState::new(Arc::new(board)),
        Duration::from_secs(config.request_timeout_secs),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
