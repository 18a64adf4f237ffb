//! Battery state aggregation for status indicators.
//!
//! This crate turns a set of raw battery readings into a renderable
//! [`PresentationSnapshot`]: normalized percentages, an icon tier and a
//! severity band per battery, and labels formatted according to the active
//! [`DisplayConfig`].
//!
//! The entry point is [`recompute`], a pure function of its two inputs. It
//! performs no I/O, holds no state between calls and is defined for every
//! input, so a malformed reading can never take the indicator down.
//!
//! # Example
//!
//! ```
//! use dualbat_engine::{recompute, BatteryReading, DisplayConfig};
//!
//! let readings = vec![BatteryReading::new("BAT0", 47.0, false)];
//! let snapshot = recompute(&readings, DisplayConfig::default());
//!
//! assert!(snapshot.has_batteries);
//! assert_eq!(snapshot.summary_label, "BAT0: 47%");
//! assert_eq!(snapshot.lines[0].tier.to_string(), "40");
//! ```

mod config;
mod engine;
mod reading;
mod snapshot;
mod tier;

pub use config::DisplayConfig;
pub use engine::{
    fallback_id, normalize_percentage, recompute, NO_BATTERY_LABEL, PLACEHOLDER_LABEL,
    SUMMARY_SEPARATOR,
};
pub use reading::{derive_id, BatteryReading};
pub use snapshot::{BatteryLine, PresentationSnapshot, SummaryIcon};
pub use tier::{IconTier, SeverityBand, TierLevel};
