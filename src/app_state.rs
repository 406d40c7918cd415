//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::WorkBoard;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Work snapshot served at `/app/web/work`.
    pub work_board: Arc<WorkBoard>,
}

impl AppState {
    /// Creates the state around a loaded board.
    #[must_use]
    pub const fn new(work_board: Arc<WorkBoard>) -> Self {
        Self { work_board }
    }
}
