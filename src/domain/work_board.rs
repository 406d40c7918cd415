//! Static work snapshot served by the demo server.
//!
//! [`WorkBoard`] holds one [`WorkResponse`] loaded at startup and answers
//! queries by filtering its work items. It is immutable once built and is
//! shared between handlers behind an `Arc`.

use std::path::Path;

use crate::error::QplanError;
use crate::work::{ALL_TRACKS, WorkQuery, WorkResponse};

/// Read-only store of the work snapshot.
#[derive(Debug, Clone, Default)]
pub struct WorkBoard {
    snapshot: WorkResponse,
}

impl WorkBoard {
    /// Creates a board serving `snapshot`.
    #[must_use]
    pub fn new(snapshot: WorkResponse) -> Self {
        Self { snapshot }
    }

    /// Loads a board from a JSON file with the `/app/web/work` response shape.
    ///
    /// # Errors
    ///
    /// Returns [`QplanError::Io`] if the file cannot be read and
    /// [`QplanError::Json`] if it does not decode.
    pub fn from_file(path: &Path) -> Result<Self, QplanError> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: WorkResponse = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            tracks = snapshot.tracks.len(),
            work_items = snapshot.work_items.len(),
            "work board loaded"
        );
        Ok(Self::new(snapshot))
    }

    /// Returns the full, unfiltered snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &WorkResponse {
        &self.snapshot
    }

    /// Answers `query`.
    ///
    /// Tracks, staffing figures and per-skill detail are returned as stored.
    /// A work item is kept when it belongs to the selected track (or the
    /// track is [`ALL_TRACKS`]) and its `triage` value, if numeric, does not
    /// exceed the threshold.
    #[must_use]
    pub fn query(&self, query: &WorkQuery) -> WorkResponse {
        let work_items = self
            .snapshot
            .work_items
            .iter()
            .filter(|item| matches_track(item, &query.track))
            .filter(|item| within_triage(item, query.triage))
            .cloned()
            .collect();

        WorkResponse {
            tracks: self.snapshot.tracks.clone(),
            staffing_stats: self.snapshot.staffing_stats.clone(),
            work_items,
            staff_by_skill: self.snapshot.staff_by_skill.clone(),
        }
    }
}

fn matches_track(item: &serde_json::Value, track: &str) -> bool {
    track == ALL_TRACKS
        || item
            .get("track")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|t| t == track)
}

fn within_triage(item: &serde_json::Value, threshold: f64) -> bool {
    item.get("triage")
        .and_then(serde_json::Value::as_f64)
        .is_none_or(|t| t <= threshold)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    fn board() -> WorkBoard {
        WorkBoard::new(WorkResponse {
            tracks: vec!["Mobile".to_string(), "Web".to_string()],
            work_items: vec![
                json!({"name": "Login", "track": "Web", "triage": 1}),
                json!({"name": "Push", "track": "Mobile", "triage": 2}),
                json!({"name": "Search", "track": "Web", "triage": 3}),
                json!({"name": "Docs"}),
            ],
            ..WorkResponse::default()
        })
    }

    fn names(response: &WorkResponse) -> Vec<&str> {
        response
            .work_items
            .iter()
            .filter_map(|i| i.get("name").and_then(serde_json::Value::as_str))
            .collect()
    }

    #[test]
    fn all_track_keeps_every_track() {
        let response = board().query(&WorkQuery {
            triage: 10.0,
            track: ALL_TRACKS.to_string(),
        });
        assert_eq!(names(&response), vec!["Login", "Push", "Search", "Docs"]);
        assert_eq!(response.tracks.len(), 2);
    }

    #[test]
    fn track_filter_drops_other_tracks_and_untracked_items() {
        let response = board().query(&WorkQuery {
            triage: 10.0,
            track: "Web".to_string(),
        });
        assert_eq!(names(&response), vec!["Login", "Search"]);
    }

    #[test]
    fn triage_threshold_is_inclusive() {
        let response = board().query(&WorkQuery {
            triage: 2.0,
            track: ALL_TRACKS.to_string(),
        });
        assert_eq!(names(&response), vec!["Login", "Push", "Docs"]);
    }

    #[test]
    fn from_file_reports_missing_file() {
        let result = WorkBoard::from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(QplanError::Io(_))));
    }

    #[test]
    fn from_file_reads_snapshot() {
        let path = std::env::temp_dir().join(format!("qplan-board-{}.json", uuid::Uuid::new_v4()));
        let body = json!({"tracks": ["Web"], "work_items": [{"name": "Login"}]});
        if std::fs::write(&path, body.to_string()).is_err() {
            panic!("could not write fixture");
        }

        let result = WorkBoard::from_file(&path);
        let _ = std::fs::remove_file(&path);

        let Ok(board) = result else {
            panic!("fixture should load");
        };
        assert_eq!(board.snapshot().tracks, vec!["Web".to_string()]);
        assert_eq!(board.snapshot().work_items.len(), 1);
    }
}
