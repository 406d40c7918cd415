//! HTTP endpoint handlers organized by resource.

pub mod system;
pub mod work;

use axum::Router;

use crate::app_state::AppState;

/// Composes all HTTP routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(work::routes())
        .merge(system::routes())
}
