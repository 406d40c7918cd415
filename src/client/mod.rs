//! WebSocket demonstration clients.
//!
//! Both clients open one connection, send one probe, log the first reply
//! and close. See [`probe::run_probe`] for the shared exchange.

pub mod echo;
pub mod ping;
pub mod probe;

pub use echo::run_echo;
pub use ping::run_ping;
pub use probe::{Probe, Reply, run_probe};
