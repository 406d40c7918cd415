//! Loads the work-planning view once and logs what it would display.
//!
//! `QPLAN_TRACK`, when set, is selected after the initial load the same
//! way a click on a track would select it.

use qplan_web::config::ClientConfig;
use qplan_web::telemetry;
use qplan_web::work::{HttpWorkSource, WorkState, tags_to_string};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init().map_err(|e| anyhow::anyhow!(e))?;
    let config = ClientConfig::from_env();

    let source = HttpWorkSource::new(config.http_url.as_str());
    let mut state = WorkState::load(&source, config.triage).await;

    if let Ok(track) = std::env::var("QPLAN_TRACK")
        && !state.select_track(&source, &track).await
    {
        tracing::warn!(%track, "unknown track; keeping current selection");
    }

    tracing::info!(
        selected = %state.selected_track,
        tracks = ?state.tracks,
        feasible_line = state.staffing_stats.feasible_line,
        "work view"
    );
    for item in &state.work_items {
        let name = item
            .get("name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("<unnamed>");
        let tags = item
            .get("tags")
            .and_then(serde_json::Value::as_object)
            .map(tags_to_string)
            .unwrap_or_default();
        tracing::info!(%name, %tags, "work item");
    }

    Ok(())
}
