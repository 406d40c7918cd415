//! Wire types of the `/app/web/work` endpoint.
//!
//! Shared by the HTTP client ([`super::HttpWorkSource`]) and the demo
//! server's work handler, so both sides agree on the JSON shape:
//!
//! ```json
//! {
//!   "tracks": ["Mobile", "Web"],
//!   "staffing_stats": { "skills": [], "required": {}, "available": {},
//!                       "net_left": {}, "feasible_line": 100 },
//!   "work_items": [],
//!   "staff_by_skill": {}
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Track name that stands for "no track filter".
pub const ALL_TRACKS: &str = "All";

/// Default feasibility threshold before the first fetch.
pub const DEFAULT_FEASIBLE_LINE: f64 = 100.0;

/// Aggregated staffing figures, keyed by skill name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StaffingStats {
    /// Skills in display order.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Demand per skill.
    #[serde(default)]
    pub required: BTreeMap<String, f64>,
    /// Availability per skill.
    #[serde(default)]
    pub available: BTreeMap<String, f64>,
    /// Availability minus demand per skill.
    #[serde(default)]
    pub net_left: BTreeMap<String, f64>,
    /// Feasibility threshold; work ranked below it cannot be staffed.
    #[serde(default = "default_feasible_line")]
    pub feasible_line: f64,
}

fn default_feasible_line() -> f64 {
    DEFAULT_FEASIBLE_LINE
}

impl Default for StaffingStats {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            required: BTreeMap::new(),
            available: BTreeMap::new(),
            net_left: BTreeMap::new(),
            feasible_line: DEFAULT_FEASIBLE_LINE,
        }
    }
}

/// Query parameters of `GET /app/web/work`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkQuery {
    /// Triage threshold.
    pub triage: f64,
    /// Selected track; [`ALL_TRACKS`] disables track filtering.
    #[serde(default = "default_track")]
    pub track: String,
}

fn default_track() -> String {
    ALL_TRACKS.to_string()
}

/// Response body of `GET /app/web/work`.
///
/// Work items and per-skill staffing records are opaque to the client and
/// kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkResponse {
    /// Known tracks, without the [`ALL_TRACKS`] sentinel.
    #[serde(default)]
    pub tracks: Vec<String>,
    /// Staffing figures for the current selection.
    #[serde(default)]
    pub staffing_stats: StaffingStats,
    /// Ranked work items.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub work_items: Vec<serde_json::Value>,
    /// Staffing detail per skill.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub staff_by_skill: BTreeMap<String, serde_json::Value>,
}
