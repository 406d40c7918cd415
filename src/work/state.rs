//! View state of the work-planning page and its user actions.

use std::collections::BTreeMap;

use super::model::{ALL_TRACKS, StaffingStats, WorkQuery, WorkResponse};
use super::source::WorkSource;
use crate::config::DEFAULT_TRIAGE;
use crate::error::QplanError;

/// Owned view state of the work-planning page.
///
/// `tracks`, `staffing_stats`, `work_items` and `staff_by_skill` are only
/// ever replaced together, by a successful [`WorkState::refresh`].
#[derive(Debug, Clone, PartialEq)]
pub struct WorkState {
    /// Track list; [`ALL_TRACKS`] is always at index 0.
    pub tracks: Vec<String>,
    /// Currently selected track.
    pub selected_track: String,
    /// Triage threshold sent with every fetch.
    pub triage: f64,
    /// Staffing figures from the last successful fetch.
    pub staffing_stats: StaffingStats,
    /// Work items from the last successful fetch.
    pub work_items: Vec<serde_json::Value>,
    /// Per-skill staffing detail from the last successful fetch.
    pub staff_by_skill: BTreeMap<String, serde_json::Value>,
}

impl Default for WorkState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkState {
    /// Creates the pre-fetch state: only the sentinel track, selected,
    /// default triage and empty data.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracks: vec![ALL_TRACKS.to_string()],
            selected_track: ALL_TRACKS.to_string(),
            triage: DEFAULT_TRIAGE,
            staffing_stats: StaffingStats::default(),
            work_items: Vec::new(),
            staff_by_skill: BTreeMap::new(),
        }
    }

    /// Creates a state and performs the initial fetch.
    ///
    /// A failed initial fetch is logged and leaves the pre-fetch state.
    pub async fn load<S: WorkSource>(source: &S, triage: f64) -> Self {
        let mut state = Self {
            triage,
            ..Self::new()
        };
        let _ = state.refresh(source).await;
        state
    }

    /// The query the next refresh will send.
    #[must_use]
    pub fn query(&self) -> WorkQuery {
        WorkQuery {
            triage: self.triage,
            track: self.selected_track.clone(),
        }
    }

    /// Fetches a fresh snapshot and applies it.
    ///
    /// On failure the error is logged and the state is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure after logging it.
    pub async fn refresh<S: WorkSource>(&mut self, source: &S) -> Result<(), QplanError> {
        let query = self.query();
        match source.fetch(&query).await {
            Ok(response) => {
                tracing::debug!(
                    track = %query.track,
                    triage = query.triage,
                    tracks = response.tracks.len(),
                    work_items = response.work_items.len(),
                    "work snapshot received"
                );
                self.apply(response);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    track = %query.track,
                    triage = query.triage,
                    "work snapshot fetch failed"
                );
                Err(err)
            }
        }
    }

    /// Selects `name` if it is a known track and refreshes.
    ///
    /// Unknown names are ignored without a fetch. Returns `true` when a
    /// refresh was issued, whatever its outcome.
    pub async fn select_track<S: WorkSource>(&mut self, source: &S, name: &str) -> bool {
        let Some(track) = self.tracks.iter().find(|t| t.as_str() == name) else {
            return false;
        };
        self.selected_track = track.clone();
        let _ = self.refresh(source).await;
        true
    }

    /// Sets the triage threshold and refreshes.
    ///
    /// Non-finite values are ignored without a fetch. Returns `true` when a
    /// refresh was issued.
    pub async fn set_triage<S: WorkSource>(&mut self, source: &S, triage: f64) -> bool {
        if !triage.is_finite() {
            tracing::debug!(triage, "ignoring non-finite triage threshold");
            return false;
        }
        self.triage = triage;
        let _ = self.refresh(source).await;
        true
    }

    fn apply(&mut self, response: WorkResponse) {
        let WorkResponse {
            tracks,
            staffing_stats,
            work_items,
            staff_by_skill,
        } = response;

        self.tracks = std::iter::once(ALL_TRACKS.to_string())
            .chain(tracks)
            .collect();
        self.staffing_stats = staffing_stats;
        self.work_items = work_items;
        self.staff_by_skill = staff_by_skill;
    }
}
