//! Ping client: sends one liveness probe and logs the acknowledgment.

use super::probe::{Probe, Reply, run_probe};
use crate::error::QplanError;

/// Sends an empty ping frame to `url` and returns the pong (or the first
/// data frame, whichever arrives first).
///
/// # Errors
///
/// See [`run_probe`].
pub async fn run_ping(url: &str) -> Result<Reply, QplanError> {
    run_probe(url, Probe::Ping(Vec::new())).await
}
