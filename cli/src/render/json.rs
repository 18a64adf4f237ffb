use chrono::{DateTime, Utc};
use dualbat_engine::PresentationSnapshot;
use serde::Serialize;

use super::icons::{summary_icon_name, tier_icon_name};

/// A snapshot plus the renderer-side icon names, as emitted by `pipe` and
/// `watch --json`.
#[derive(Debug, Serialize)]
pub struct JsonSnapshot<'a> {
    pub timestamp: String,
    #[serde(flatten)]
    pub snapshot: &'a PresentationSnapshot,
    pub summary_icon_name: String,
    pub line_icon_names: Vec<String>,
}

impl<'a> JsonSnapshot<'a> {
    pub fn new(snapshot: &'a PresentationSnapshot, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at.to_rfc3339(),
            summary_icon_name: summary_icon_name(snapshot.summary_icon),
            line_icon_names: snapshot
                .lines
                .iter()
                .map(|line| tier_icon_name(line.tier))
                .collect(),
            snapshot,
        }
    }
}

pub fn to_json(
    snapshot: &PresentationSnapshot,
    at: DateTime<Utc>,
    compact: bool,
) -> serde_json::Result<String> {
    let doc = JsonSnapshot::new(snapshot, at);
    if compact {
        serde_json::to_string(&doc)
    } else {
        serde_json::to_string_pretty(&doc)
    }
}
