//! Single-shot WebSocket exchange.
//!
//! [`run_probe`] connects, sends one [`Probe`], waits for the first
//! matching [`Reply`], then closes. There is no retry and no timeout: the
//! first error or the first reply ends the exchange.

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message;

use crate::error::QplanError;

/// What the client sends once the connection is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// A text frame.
    Text(String),
    /// A ping control frame with the given payload.
    Ping(Vec<u8>),
}

/// The first reply received for a [`Probe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A text frame.
    Text(String),
    /// A binary frame.
    Binary(Vec<u8>),
    /// A pong control frame.
    Pong(Vec<u8>),
}

impl Probe {
    fn into_message(self) -> Message {
        match self {
            Self::Text(text) => Message::text(text),
            Self::Ping(payload) => Message::Ping(payload.into()),
        }
    }

    const fn accepts_pong(&self) -> bool {
        matches!(self, Self::Ping(_))
    }
}

/// Connects to `url`, sends `probe` and returns the first reply.
///
/// Text and binary frames always count as a reply; pongs only count when
/// the probe was a ping. Server pings are answered by the WebSocket layer.
///
/// # Errors
///
/// - [`QplanError::WebSocket`] if the handshake or any frame I/O fails.
/// - [`QplanError::ConnectionClosed`] if the server closes before replying.
pub async fn run_probe(url: &str, probe: Probe) -> Result<Reply, QplanError> {
    let result = exchange(url, probe).await;
    if let Err(err) = &result {
        tracing::error!(%url, error = %err, "websocket exchange failed");
    }
    result
}

async fn exchange(url: &str, probe: Probe) -> Result<Reply, QplanError> {
    let (mut ws, _response) = tokio_tungstenite::connect_async(url).await?;
    tracing::info!(%url, "connected");

    let accepts_pong = probe.accepts_pong();
    ws.send(probe.into_message()).await?;

    let reply = loop {
        let Some(frame) = ws.next().await else {
            tracing::info!("disconnected");
            return Err(QplanError::ConnectionClosed);
        };
        match frame? {
            Message::Text(text) => break Reply::Text(text.as_str().to_owned()),
            Message::Binary(data) => break Reply::Binary(data.to_vec()),
            Message::Pong(data) if accepts_pong => break Reply::Pong(data.to_vec()),
            Message::Close(frame) => {
                tracing::info!(?frame, "disconnected");
                return Err(QplanError::ConnectionClosed);
            }
            _ => {}
        }
    };
    tracing::info!(?reply, "reply received");

    ws.close(None).await?;
    // Drain until the server acknowledges the close.
    while let Some(frame) = ws.next().await {
        if frame.is_err() {
            break;
        }
    }
    tracing::info!("disconnected");

    Ok(reply)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    /// Accepts one connection, reads the first frame, then closes without
    /// replying.
    async fn spawn_closing_server() -> String {
        let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
            panic!("bind failed");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("no local addr");
        };
        tokio::spawn(async move {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let Ok(mut ws) = tokio_tungstenite::accept_async(stream).await else {
                return;
            };
            let _ = ws.next().await;
            let _ = ws.close(None).await;
            while let Some(Ok(_)) = ws.next().await {}
        });
        format!("ws://{addr}")
    }

    #[test]
    fn text_probe_becomes_text_frame() {
        let msg = Probe::Text("Hello".to_string()).into_message();
        assert!(matches!(msg, Message::Text(ref t) if t.as_str() == "Hello"));
    }

    #[test]
    fn only_ping_probe_accepts_pong() {
        assert!(Probe::Ping(Vec::new()).accepts_pong());
        assert!(!Probe::Text(String::new()).accepts_pong());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_websocket_error() {
        let result = run_probe("ws://127.0.0.1:1", Probe::Text("Hello".to_string())).await;
        assert!(matches!(result, Err(QplanError::WebSocket(_))));
    }

    #[tokio::test]
    async fn close_before_reply_is_connection_closed() {
        let url = spawn_closing_server().await;
        let result = run_probe(&url, Probe::Text("Hello".to_string())).await;
        assert!(matches!(result, Err(QplanError::ConnectionClosed)));
    }

    #[tokio::test]
    async fn ping_closed_before_pong_is_connection_closed() {
        let url = spawn_closing_server().await;
        let result = run_probe(&url, Probe::Ping(Vec::new())).await;
        assert!(matches!(result, Err(QplanError::ConnectionClosed)));
    }
}
