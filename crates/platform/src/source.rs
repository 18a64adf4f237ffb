//! Battery source trait and source selection.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use color_eyre::eyre::Result;
use dualbat_engine::BatteryReading;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::starship::StarshipSource;

/// A provider of raw battery readings.
pub trait BatterySource {
    /// Short name used in logs and debug output.
    fn name(&self) -> &'static str;

    /// Query the provider. Errors mean the provider could not be reached.
    fn try_list(&mut self) -> Result<Vec<BatteryReading>>;

    /// Query the provider, treating any failure as "no batteries".
    ///
    /// The returned order is whatever the provider reports; callers must not
    /// rely on it being sorted.
    fn list_batteries(&mut self) -> Vec<BatteryReading> {
        match self.try_list() {
            Ok(readings) => {
                debug!(source = self.name(), count = readings.len(), "Listed batteries");
                readings
            }
            Err(e) => {
                warn!(source = self.name(), error = %e, "Battery source unavailable");
                Vec::new()
            }
        }
    }
}

impl<S: BatterySource + ?Sized> BatterySource for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn try_list(&mut self) -> Result<Vec<BatteryReading>> {
        (**self).try_list()
    }

    fn list_batteries(&mut self) -> Vec<BatteryReading> {
        (**self).list_batteries()
    }
}

/// Returns the same readings on every call.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    readings: Vec<BatteryReading>,
}

impl StaticSource {
    pub fn new(readings: Vec<BatteryReading>) -> Self {
        Self { readings }
    }

    /// Replace the readings returned from the next call onwards.
    pub fn set(&mut self, readings: Vec<BatteryReading>) {
        self.readings = readings;
    }
}

impl BatterySource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    fn try_list(&mut self) -> Result<Vec<BatteryReading>> {
        Ok(self.readings.clone())
    }
}

/// Make repeated non-empty ids unique within one listing.
///
/// The first occurrence keeps its id; later ones get their 1-based position
/// appended (`bq20z451`, `bq20z451 #2`). Empty ids are left for the engine.
pub fn disambiguate_ids(readings: &mut [BatteryReading]) {
    let mut seen = HashSet::new();
    for (index, reading) in readings.iter_mut().enumerate() {
        if reading.id.trim().is_empty() {
            continue;
        }
        if seen.contains(&reading.id) {
            let suffix = format!(" #{}", index + 1);
            let mut unique = format!("{}{}", reading.id, suffix);
            while seen.contains(&unique) {
                unique.push_str(&suffix);
            }
            debug!(id = %reading.id, unique = %unique, "Duplicate battery id");
            reading.id = unique;
        }
        seen.insert(reading.id.clone());
    }
}

/// Which provider to read batteries from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// UPower when the system bus answers, then sysfs, then starship-battery
    #[default]
    Auto,
    Upower,
    Sysfs,
    Starship,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Auto => "auto",
            SourceKind::Upower => "upower",
            SourceKind::Sysfs => "sysfs",
            SourceKind::Starship => "starship",
        }
    }

    /// Resolve `Auto` into the concrete provider for this system.
    pub fn resolve(self) -> SourceKind {
        match self {
            SourceKind::Auto if upower_available() => SourceKind::Upower,
            SourceKind::Auto if sysfs_supported() => SourceKind::Sysfs,
            SourceKind::Auto => SourceKind::Starship,
            other => other,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(SourceKind::Auto),
            "upower" => Ok(SourceKind::Upower),
            "sysfs" => Ok(SourceKind::Sysfs),
            "starship" => Ok(SourceKind::Starship),
            other => Err(format!(
                "unknown battery source '{}' (expected auto, upower, sysfs or starship)",
                other
            )),
        }
    }
}

#[cfg(target_os = "linux")]
fn upower_available() -> bool {
    crate::linux::UPowerSource::is_available()
}

#[cfg(not(target_os = "linux"))]
fn upower_available() -> bool {
    false
}

#[cfg(target_os = "linux")]
fn sysfs_supported() -> bool {
    crate::linux::SysfsSource::is_supported()
}

#[cfg(not(target_os = "linux"))]
fn sysfs_supported() -> bool {
    false
}

/// Open the provider selected by `kind`.
pub fn open(kind: SourceKind) -> Box<dyn BatterySource> {
    let resolved = kind.resolve();
    debug!(requested = %kind, resolved = %resolved, "Opening battery source");

    match resolved {
        #[cfg(target_os = "linux")]
        SourceKind::Upower => Box::new(crate::linux::UPowerSource::new()),
        #[cfg(target_os = "linux")]
        SourceKind::Sysfs => Box::new(crate::linux::SysfsSource::new()),
        #[cfg(not(target_os = "linux"))]
        SourceKind::Upower | SourceKind::Sysfs => {
            warn!(source = %resolved, "Source is only available on Linux, using starship-battery");
            Box::new(StarshipSource::new())
        }
        SourceKind::Auto | SourceKind::Starship => Box::new(StarshipSource::new()),
    }
}
