//! Echo loop for a single WebSocket connection.

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

/// Runs the echo loop for one connection.
///
/// - Text and binary frames are sent straight back.
/// - Pings are answered with pongs by the WebSocket layer.
/// - The loop ends when the stream does (close handshake or read error).
pub async fn run_connection(socket: WebSocket, conn_id: uuid::Uuid) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    tracing::info!(%conn_id, "ws connection opened");

    while let Some(msg) = ws_rx.next().await {
        let reply = match msg {
            Ok(Message::Text(text)) => {
                tracing::info!(%conn_id, text = %text.as_str(), "got a message");
                Message::Text(text)
            }
            Ok(Message::Binary(data)) => {
                tracing::debug!(%conn_id, len = data.len(), "got a binary message");
                Message::Binary(data)
            }
            Ok(Message::Ping(_)) => {
                tracing::debug!(%conn_id, "ping");
                continue;
            }
            // The next read flushes the close reply and ends the stream.
            Ok(Message::Pong(_) | Message::Close(_)) => continue,
            Err(err) => {
                tracing::warn!(%conn_id, error = %err, "ws read failed");
                break;
            }
        };

        if ws_tx.send(reply).await.is_err() {
            break;
        }
    }

    tracing::info!(%conn_id, "ws connection closed");
}
