//! Work endpoint: the staffing/work-item snapshot behind the planning page.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::error::QplanError;
use crate::work::{WORK_PATH, WorkQuery, WorkResponse};

/// `GET /app/web/work` — Work snapshot for a triage threshold and track.
///
/// # Errors
///
/// Returns [`QplanError::InvalidRequest`] when the query string does not
/// decode (missing or non-numeric `triage`) or the triage threshold is
/// negative or non-finite.
#[utoipa::path(
    get,
    path = "/app/web/work",
    tag = "Work",
    summary = "Work snapshot",
    description = "Returns tracks, staffing figures, per-skill staffing and the work items \
                   matching the triage threshold and track.",
    params(
        ("triage" = f64, Query, description = "Triage threshold (finite, non-negative)"),
        ("track" = Option<String>, Query, description = "Track name; `All` disables filtering"),
    ),
    responses(
        (status = 200, description = "Work snapshot", body = WorkResponse),
        (status = 400, description = "Invalid query parameters"),
    )
)]
pub async fn work_handler(
    State(state): State<AppState>,
    query: Result<Query<WorkQuery>, QueryRejection>,
) -> Result<impl IntoResponse, QplanError> {
    let Query(query) = query.map_err(|e| QplanError::InvalidRequest(e.body_text()))?;
    if !query.triage.is_finite() || query.triage < 0.0 {
        return Err(QplanError::InvalidRequest(format!(
            "triage must be a non-negative number, got {}",
            query.triage
        )));
    }

    tracing::debug!(triage = query.triage, track = %query.track, "work query");
    Ok(Json(state.work_board.query(&query)))
}

/// Work routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(WORK_PATH, get(work_handler))
}
