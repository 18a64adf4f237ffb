//! The recompute pipeline: normalize, classify, format, assemble.

use tracing::{debug, trace};

use crate::config::DisplayConfig;
use crate::reading::BatteryReading;
use crate::snapshot::{BatteryLine, PresentationSnapshot, SummaryIcon};
use crate::tier::{IconTier, SeverityBand};

pub const NO_BATTERY_LABEL: &str = "No battery";

pub const PLACEHOLDER_LABEL: &str = "--/-- %";

/// Joins per-battery labels into the summary label.
pub const SUMMARY_SEPARATOR: &str = "/";

/// Builds a fresh snapshot from `readings` under `config`.
///
/// Lines keep the order of `readings`. Never fails: percentages are rounded
/// and clamped, blank ids are replaced with `Battery N`, and an empty input
/// yields the "No battery" snapshot.
pub fn recompute(readings: &[BatteryReading], config: DisplayConfig) -> PresentationSnapshot {
    if readings.is_empty() {
        trace!("No readings, emitting empty snapshot");
        return PresentationSnapshot::no_battery(config);
    }

    let lines: Vec<BatteryLine> = readings
        .iter()
        .enumerate()
        .map(|(index, reading)| build_line(index, reading, config))
        .collect();

    let summary_icon = lines
        .first()
        .map(|line| SummaryIcon::Tier(line.tier))
        .unwrap_or(SummaryIcon::Missing);

    let summary_label = lines
        .iter()
        .map(|line| line.label.as_str())
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR);

    trace!(
        count = lines.len(),
        summary = %summary_label,
        icon = %summary_icon,
        "Recomputed snapshot"
    );

    PresentationSnapshot {
        lines,
        has_batteries: true,
        summary_icon,
        summary_label,
        show_icon: config.show_icon,
    }
}

/// Rounds to the nearest integer and clamps into 0-100. NaN becomes 0.
pub fn normalize_percentage(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Name used for a battery whose source gave no usable identifier.
pub fn fallback_id(index: usize) -> String {
    format!("Battery {}", index + 1)
}

fn build_line(index: usize, reading: &BatteryReading, config: DisplayConfig) -> BatteryLine {
    let percentage = normalize_percentage(reading.percentage);
    if !(0.0..=100.0).contains(&reading.percentage) {
        debug!(
            index,
            raw = reading.percentage,
            normalized = percentage,
            "Clamped out-of-range battery percentage"
        );
    }

    let id = if reading.id.trim().is_empty() {
        let generated = fallback_id(index);
        debug!(index, id = %generated, "Battery reading has no name, using fallback");
        generated
    } else {
        reading.id.clone()
    };

    let label = if config.show_name {
        format!("{}: {}%", id, percentage)
    } else {
        format!("{}%", percentage)
    };

    BatteryLine {
        tier: IconTier::classify(percentage, reading.charging),
        band: SeverityBand::from_percentage(percentage),
        bar_fill_fraction: f64::from(percentage) / 100.0,
        charging: reading.charging,
        percentage,
        label,
        id,
    }
}
