//! Tracing subscriber setup shared by every binary.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` (default `info`). Setting
/// `LOG_FORMAT=json` switches to newline-delimited JSON output.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    }
}
