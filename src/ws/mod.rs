//! WebSocket layer of the demo server.
//!
//! The endpoint at `/` echoes text and binary frames back to the sender and
//! answers pings, which is all the demo clients need.

pub mod connection;
pub mod handler;
