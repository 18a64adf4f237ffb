//! Battery reading sources for dualbat.
//!
//! This crate provides the [`BatterySource`] trait and the concrete
//! providers that feed the aggregation engine in `dualbat-engine`.
//!
//! A source never fails towards its caller: when the underlying provider
//! cannot be reached, [`BatterySource::list_batteries`] logs the fault and
//! returns an empty list, which the engine renders as "No battery".
//!
//! # Sources
//!
//! - [`UPowerSource`] - the UPower daemon over D-Bus (Linux only)
//! - [`SysfsSource`] - Linux `/sys/class/power_supply` (Linux only)
//! - [`StarshipSource`] - cross-platform, backed by `starship-battery`
//! - [`StaticSource`] - a fixed list, for fixtures and tests
//!
//! # Example
//!
//! ```ignore
//! use dualbat_platform::{open, SourceKind};
//!
//! let mut source = open(SourceKind::Auto);
//! for reading in source.list_batteries() {
//!     println!("{}: {:.0}%", reading.id, reading.percentage);
//! }
//! ```

mod source;
mod starship;
mod types;

pub use source::{open, BatterySource, SourceKind, StaticSource};
pub use starship::StarshipSource;
pub use types::ChargeState;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "linux")]
pub use linux::{SysfsSource, UPowerSource};
