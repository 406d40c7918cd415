//! # qplan-web
//!
//! The web-facing pieces of the qplan work planner: two WebSocket
//! demonstration clients, the work-planning view model, and a small demo
//! server both talk to.
//!
//! ## Architecture
//!
//! ```text
//! echo_client / ping_client ──ws──┐
//!                                 ├── demo server (axum, :8888)
//! work_view (WorkState) ────http──┘     ├── ws/   echo endpoint at `/`
//!                                       ├── api/  GET /app/web/work, /health
//!                                       └── domain/ WorkBoard snapshot
//! ```
//!
//! The three client units share nothing at runtime; each owns its single
//! connection or request.

pub mod api;
pub mod app;
pub mod app_state;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod telemetry;
pub mod work;
pub mod ws;
