use dualbat_engine::{BatteryLine, PresentationSnapshot};

use super::icons::{render_summary, render_tier, IconStyle};

const BAR_WIDTH: usize = 10;

/// The one-line panel label: summary icon (if enabled) and summary label.
pub fn panel_line(snapshot: &PresentationSnapshot, style: IconStyle) -> String {
    if snapshot.show_icon {
        format!(
            "{} {}",
            render_summary(snapshot.summary_icon, style),
            snapshot.summary_label
        )
    } else {
        snapshot.summary_label.clone()
    }
}

/// One row per battery, as shown in the dropdown.
pub fn dropdown_lines(snapshot: &PresentationSnapshot, style: IconStyle) -> Vec<String> {
    snapshot
        .lines
        .iter()
        .map(|line| dropdown_line(line, snapshot.show_icon, style))
        .collect()
}

fn dropdown_line(line: &BatteryLine, show_icon: bool, style: IconStyle) -> String {
    let bar = text_bar(line.bar_fill_fraction, BAR_WIDTH);
    if show_icon {
        format!("{} {} [{}] {}", render_tier(line.tier, style), bar, line.band, line.label)
    } else {
        format!("{} [{}] {}", bar, line.band, line.label)
    }
}

/// A fixed-width bar such as `█████░░░░░`.
pub fn text_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
