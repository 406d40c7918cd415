//! Axum WebSocket upgrade handler.

use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_connection;

/// `GET /` — Upgrade HTTP connection to the echo WebSocket.
pub async fn ws_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    let conn_id = uuid::Uuid::new_v4();
    ws.on_upgrade(move |socket| run_connection(socket, conn_id))
}
