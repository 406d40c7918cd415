//! Echo client: sends one text payload and logs what comes back.

use super::probe::{Probe, Reply, run_probe};
use crate::error::QplanError;

/// Sends `payload` as a text frame to `url` and returns the first reply.
///
/// # Errors
///
/// See [`run_probe`].
pub async fn run_echo(url: &str, payload: &str) -> Result<Reply, QplanError> {
    run_probe(url, Probe::Text(payload.to_string())).await
}
