//! Icon tiers and severity bands.
//!
//! Two classifications are derived from every battery percentage and they
//! are deliberately independent: the icon tier follows decile steps, the
//! severity band only has three levels and drives bar colouring.

use std::fmt;

use serde::{Serialize, Serializer};

/// Percentage at which a battery is shown as full.
pub const FULL_THRESHOLD: u8 = 90;

/// Below this a battery is in the low band.
pub const LOW_BAND_BELOW: u8 = 20;

/// Below this (and not low) a battery is in the medium band.
pub const MEDIUM_BAND_BELOW: u8 = 50;

/// Charge level bucket used to select an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TierLevel {
    Level0,
    Level10,
    Level20,
    Level30,
    Level40,
    Level50,
    Level60,
    Level70,
    Level80,
    Full,
}

impl TierLevel {
    pub const ALL: [TierLevel; 10] = [
        TierLevel::Level0,
        TierLevel::Level10,
        TierLevel::Level20,
        TierLevel::Level30,
        TierLevel::Level40,
        TierLevel::Level50,
        TierLevel::Level60,
        TierLevel::Level70,
        TierLevel::Level80,
        TierLevel::Full,
    ];

    /// Classifies an already normalized percentage.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= FULL_THRESHOLD {
            return TierLevel::Full;
        }
        match percentage / 10 {
            0 => TierLevel::Level0,
            1 => TierLevel::Level10,
            2 => TierLevel::Level20,
            3 => TierLevel::Level30,
            4 => TierLevel::Level40,
            5 => TierLevel::Level50,
            6 => TierLevel::Level60,
            7 => TierLevel::Level70,
            _ => TierLevel::Level80,
        }
    }

    /// Lower bound of the bucket; `Full` reports 100.
    pub fn floor(&self) -> u8 {
        match self {
            TierLevel::Level0 => 0,
            TierLevel::Level10 => 10,
            TierLevel::Level20 => 20,
            TierLevel::Level30 => 30,
            TierLevel::Level40 => 40,
            TierLevel::Level50 => 50,
            TierLevel::Level60 => 60,
            TierLevel::Level70 => 70,
            TierLevel::Level80 => 80,
            TierLevel::Full => 100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TierLevel::Level0 => "0",
            TierLevel::Level10 => "10",
            TierLevel::Level20 => "20",
            TierLevel::Level30 => "30",
            TierLevel::Level40 => "40",
            TierLevel::Level50 => "50",
            TierLevel::Level60 => "60",
            TierLevel::Level70 => "70",
            TierLevel::Level80 => "80",
            TierLevel::Full => "full",
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, TierLevel::Full)
    }
}

impl fmt::Display for TierLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A tier level combined with the charging state.
///
/// Renders as `40`, `40-charging`, `full` or `full-charging`. Mapping a tier
/// to an actual icon asset is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconTier {
    pub level: TierLevel,
    pub charging: bool,
}

impl IconTier {
    pub fn new(level: TierLevel, charging: bool) -> Self {
        Self { level, charging }
    }

    pub fn classify(percentage: u8, charging: bool) -> Self {
        Self::new(TierLevel::from_percentage(percentage), charging)
    }

    /// Every renderable tier, non-charging variant first.
    pub fn all() -> impl Iterator<Item = IconTier> {
        TierLevel::ALL
            .into_iter()
            .flat_map(|level| [IconTier::new(level, false), IconTier::new(level, true)])
    }
}

impl fmt::Display for IconTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.charging {
            write!(f, "{}-charging", self.level)
        } else {
            write!(f, "{}", self.level)
        }
    }
}

impl Serialize for IconTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Coarse severity used for bar colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    Low,
    Medium,
    High,
}

impl SeverityBand {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage < LOW_BAND_BELOW {
            SeverityBand::Low
        } else if percentage < MEDIUM_BAND_BELOW {
            SeverityBand::Medium
        } else {
            SeverityBand::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityBand::Low => "low",
            SeverityBand::Medium => "medium",
            SeverityBand::High => "high",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
