//! Router assembly for the demo server.

use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::AppState;
use crate::ws::handler::ws_handler;

/// Default per-request timeout of the HTTP routes.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the full application: WebSocket echo at `/`, HTTP API, tracing
/// and CORS layers.
pub fn build_app(state: AppState) -> Router {
    build_app_with_timeout(state, DEFAULT_REQUEST_TIMEOUT)
}

/// [`build_app`] with an explicit request timeout.
///
/// The timeout bounds the time to produce a response; upgraded WebSocket
/// connections are not affected once the upgrade response is sent.
pub fn build_app_with_timeout(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(api::build_router())
        .route("/", get(ws_handler))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
