//! Configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Defaults reproduce the fixed addresses
//! the demo clients and the demo server have always used (`localhost:8888`).

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default WebSocket target of the demo clients.
pub const DEFAULT_WS_URL: &str = "ws://localhost:8888";

/// Default base URL of the work endpoint.
pub const DEFAULT_HTTP_URL: &str = "http://localhost:8888";

/// Payload sent by the echo client.
pub const DEFAULT_ECHO_PAYLOAD: &str = "Hello";

/// Initial triage threshold of the work view.
pub const DEFAULT_TRIAGE: f64 = 1.5;

/// Demo server configuration.
///
/// Loaded once at startup via [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8888`).
    pub listen_addr: SocketAddr,

    /// JSON file holding the work snapshot served at `/app/web/work`.
    /// The board starts empty when unset.
    pub work_data_path: Option<PathBuf>,

    /// Per-request timeout applied to the HTTP routes.
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8888".to_string())
            .parse()?;

        let work_data_path = std::env::var("WORK_DATA_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30);

        Ok(Self {
            listen_addr,
            work_data_path,
            request_timeout_secs,
        })
    }
}

/// Client-side configuration shared by the demo binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// WebSocket URL the echo and ping clients connect to.
    pub ws_url: String,
    /// Base URL of the HTTP work endpoint.
    pub http_url: String,
    /// Text payload sent by the echo client.
    pub echo_payload: String,
    /// Initial triage threshold of the work view.
    pub triage: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ws_url: DEFAULT_WS_URL.to_string(),
            http_url: DEFAULT_HTTP_URL.to_string(),
            echo_payload: DEFAULT_ECHO_PAYLOAD.to_string(),
            triage: DEFAULT_TRIAGE,
        }
    }
}

impl ClientConfig {
    /// Loads client configuration from environment variables, falling back
    /// to the defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            ws_url: std::env::var("QPLAN_WS_URL").unwrap_or(defaults.ws_url),
            http_url: std::env::var("QPLAN_HTTP_URL").unwrap_or(defaults.http_url),
            echo_payload: std::env::var("QPLAN_ECHO_PAYLOAD").unwrap_or(defaults.echo_payload),
            triage: parse_env::<f64>("QPLAN_TRIAGE", defaults.triage),
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
