//! Work-planning view model.
//!
//! [`WorkState`] is the owned state of the planning page. Its actions
//! ([`WorkState::refresh`], [`WorkState::select_track`],
//! [`WorkState::set_triage`]) fetch through a [`WorkSource`] and either
//! replace the fetched fields together or leave them untouched.

pub mod model;
pub mod source;
pub mod state;
pub mod tags;

pub use model::{ALL_TRACKS, StaffingStats, WorkQuery, WorkResponse};
pub use source::{HttpWorkSource, WORK_PATH, WorkSource};
pub use state::WorkState;
pub use tags::tags_to_string;

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::app::build_app;
    use crate::app_state::AppState;
    use crate::domain::WorkBoard;

    async fn spawn_server(snapshot: WorkResponse) -> String {
        let app = build_app(AppState::new(Arc::new(WorkBoard::new(snapshot))));
        let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
            panic!("bind failed");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("no local addr");
        };
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn view_loads_and_filters_through_http() {
        let base = spawn_server(WorkResponse {
            tracks: vec!["Mobile".to_string(), "Web".to_string()],
            work_items: vec![
                json!({"name": "Login", "track": "Web", "triage": 1}),
                json!({"name": "Push", "track": "Mobile", "triage": 1}),
            ],
            ..WorkResponse::default()
        })
        .await;
        let source = HttpWorkSource::new(base);

        let mut state = WorkState::load(&source, 1.5).await;
        assert_eq!(state.tracks, vec!["All", "Mobile", "Web"]);
        assert_eq!(state.work_items.len(), 2);

        assert!(state.select_track(&source, "Mobile").await);
        assert_eq!(state.work_items, vec![json!({"name": "Push", "track": "Mobile", "triage": 1})]);
    }

    #[tokio::test]
    async fn rejected_query_leaves_view_untouched() {
        let base = spawn_server(WorkResponse {
            tracks: vec!["Web".to_string()],
            ..WorkResponse::default()
        })
        .await;
        let source = HttpWorkSource::new(base);
        let mut state = WorkState::load(&source, 1.5).await;
        let before = state.clone();

        // Negative thresholds are refused with 400 by the server.
        state.triage = -1.0;
        let result = state.refresh(&source).await;

        assert!(matches!(result, Err(crate::error::QplanError::HttpStatus(400))));
        assert_eq!(state.tracks, before.tracks);
        assert_eq!(state.work_items, before.work_items);
        assert_eq!(state.staffing_stats, before.staffing_stats);
        assert_eq!(state.staff_by_skill, before.staff_by_skill);
    }
}
