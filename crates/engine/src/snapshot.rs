use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::DisplayConfig;
use crate::engine::{NO_BATTERY_LABEL, PLACEHOLDER_LABEL};
use crate::tier::{IconTier, SeverityBand};

/// One normalized battery, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatteryLine {
    pub id: String,
    pub percentage: u8,
    pub charging: bool,
    pub tier: IconTier,
    pub band: SeverityBand,
    pub label: String,
    /// Proportion of a bar to fill, `percentage / 100`.
    pub bar_fill_fraction: f64,
}

/// Icon shown next to the summary label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryIcon {
    Tier(IconTier),
    Missing,
}

impl SummaryIcon {
    pub fn tier(&self) -> Option<IconTier> {
        match self {
            SummaryIcon::Tier(tier) => Some(*tier),
            SummaryIcon::Missing => None,
        }
    }
}

impl fmt::Display for SummaryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryIcon::Tier(tier) => write!(f, "{}", tier),
            SummaryIcon::Missing => write!(f, "missing"),
        }
    }
}

impl Serialize for SummaryIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of one recompute. Valid until the next one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationSnapshot {
    pub lines: Vec<BatteryLine>,
    pub has_batteries: bool,
    pub summary_icon: SummaryIcon,
    pub summary_label: String,
    /// Whether the renderer should draw tier icons. Lines keep their tier
    /// either way.
    pub show_icon: bool,
}

impl PresentationSnapshot {
    pub fn no_battery(config: DisplayConfig) -> Self {
        Self {
            lines: Vec::new(),
            has_batteries: false,
            summary_icon: SummaryIcon::Missing,
            summary_label: NO_BATTERY_LABEL.to_string(),
            show_icon: config.show_icon,
        }
    }

    /// Shown by a host before its first poll has completed.
    pub fn placeholder(config: DisplayConfig) -> Self {
        Self {
            summary_label: PLACEHOLDER_LABEL.to_string(),
            ..Self::no_battery(config)
        }
    }

    pub fn any_charging(&self) -> bool {
        self.lines.iter().any(|line| line.charging)
    }

    /// The most severe band across all lines.
    pub fn worst_band(&self) -> Option<SeverityBand> {
        self.lines.iter().map(|line| line.band).min()
    }
}
