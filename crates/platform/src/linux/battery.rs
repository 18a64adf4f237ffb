use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Result, WrapErr};
use dualbat_engine::{derive_id, BatteryReading};
use tracing::{trace, warn};

use crate::source::BatterySource;
use crate::types::ChargeState;

pub const POWER_SUPPLY_PATH: &str = "/sys/class/power_supply";

/// Reads every system battery from the kernel's power-supply class.
///
/// Batteries are reported in device-name order (`BAT0`, `BAT1`, ...).
/// Peripheral batteries (`scope` = `Device`, e.g. a wireless mouse) are
/// skipped.
#[derive(Debug, Clone)]
pub struct SysfsSource {
    root: PathBuf,
}

impl SysfsSource {
    pub fn new() -> Self {
        Self::with_root(POWER_SUPPLY_PATH)
    }

    /// Read from an alternative power-supply directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn is_supported() -> bool {
        Path::new(POWER_SUPPLY_PATH).exists()
    }

    fn battery_dirs(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.root)
            .wrap_err_with(|| format!("Reading {}", self.root.display()))?;

        let mut dirs: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| is_system_battery(path))
            .collect();
        dirs.sort();
        Ok(dirs)
    }
}

impl Default for SysfsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BatterySource for SysfsSource {
    fn name(&self) -> &'static str {
        "sysfs"
    }

    fn try_list(&mut self) -> Result<Vec<BatteryReading>> {
        let mut readings = Vec::new();
        for path in self.battery_dirs()? {
            match read_battery(&path) {
                Ok(reading) => {
                    trace!(path = %path.display(), ?reading, "Read sysfs battery");
                    readings.push(reading);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable battery");
                }
            }
        }
        Ok(readings)
    }
}

fn is_system_battery(path: &Path) -> bool {
    let is_battery = read_attr(path, "type").is_some_and(|t| t == "Battery");
    let is_peripheral = read_attr(path, "scope").is_some_and(|s| s.eq_ignore_ascii_case("Device"));
    is_battery && !is_peripheral
}

fn read_battery(path: &Path) -> Result<BatteryReading> {
    let percentage = read_percentage(path)?;
    let state = read_attr(path, "status")
        .map(|s| ChargeState::from_sysfs_status(&s))
        .unwrap_or_default();
    let model = read_attr(path, "model_name");
    let id = derive_id(path.to_str(), model.as_deref(), None);

    Ok(BatteryReading::new(id, percentage, state.is_charging()))
}

fn read_percentage(path: &Path) -> Result<f64> {
    if let Some(capacity) = read_number(path, "capacity") {
        return Ok(capacity);
    }

    for (now, full) in [("energy_now", "energy_full"), ("charge_now", "charge_full")] {
        if let (Some(now), Some(full)) = (read_number(path, now), read_number(path, full)) {
            if full > 0.0 {
                return Ok(now / full * 100.0);
            }
        }
    }

    Err(eyre!("No capacity information in {}", path.display()))
}

fn read_attr(path: &Path, name: &str) -> Option<String> {
    fs::read_to_string(path.join(name))
        .ok()
        .map(|s| s.trim().to_string())
}

fn read_number(path: &Path, name: &str) -> Option<f64> {
    read_attr(path, name).and_then(|s| s.parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_supply(root: &Path, name: &str, attrs: &[(&str, &str)]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for (attr, value) in attrs {
            fs::write(dir.join(attr), format!("{}\n", value)).unwrap();
        }
    }

    #[test]
    fn test_reads_batteries_in_name_order() {
        let td = TempDir::new().unwrap();
        write_supply(
            td.path(),
            "BAT1",
            &[("type", "Battery"), ("capacity", "81"), ("status", "Discharging")],
        );
        write_supply(
            td.path(),
            "BAT0",
            &[("type", "Battery"), ("capacity", "47"), ("status", "Charging")],
        );
        write_supply(td.path(), "AC", &[("type", "Mains"), ("online", "1")]);

        let mut source = SysfsSource::with_root(td.path());
        let readings = source.try_list().unwrap();

        assert_eq!(
            readings,
            vec![
                BatteryReading::new("BAT0", 47.0, true),
                BatteryReading::new("BAT1", 81.0, false),
            ]
        );
    }

    #[test]
    fn test_skips_peripheral_batteries() {
        let td = TempDir::new().unwrap();
        write_supply(td.path(), "BAT0", &[("type", "Battery"), ("capacity", "60")]);
        write_supply(
            td.path(),
            "hidpp_battery_0",
            &[("type", "Battery"), ("scope", "Device"), ("capacity", "15")],
        );

        let readings = SysfsSource::with_root(td.path()).try_list().unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].id, "BAT0");
    }

    #[test]
    fn test_energy_fallback_when_capacity_missing() {
        let td = TempDir::new().unwrap();
        write_supply(
            td.path(),
            "BAT0",
            &[
                ("type", "Battery"),
                ("energy_now", "25000000"),
                ("energy_full", "50000000"),
                ("status", "Not charging"),
            ],
        );

        let readings = SysfsSource::with_root(td.path()).try_list().unwrap();
        assert_eq!(readings, vec![BatteryReading::new("BAT0", 50.0, false)]);
    }

    #[test]
    fn test_charge_fallback_when_energy_missing() {
        let td = TempDir::new().unwrap();
        write_supply(
            td.path(),
            "BAT1",
            &[
                ("type", "Battery"),
                ("charge_now", "1500000"),
                ("charge_full", "4000000"),
                ("status", "Charging"),
            ],
        );
        write_supply(
            td.path(),
            "BAT2",
            &[
                ("type", "Battery"),
                ("energy_now", "1000"),
                ("energy_full", "0"),
                ("charge_now", "3000000"),
                ("charge_full", "4000000"),
            ],
        );

        let readings = SysfsSource::with_root(td.path()).try_list().unwrap();
        assert_eq!(
            readings,
            vec![
                BatteryReading::new("BAT1", 37.5, true),
                BatteryReading::new("BAT2", 75.0, false),
            ]
        );
    }

    #[test]
    fn test_unreadable_battery_is_skipped() {
        let td = TempDir::new().unwrap();
        write_supply(td.path(), "BAT0", &[("type", "Battery")]);
        write_supply(td.path(), "BAT1", &[("type", "Battery"), ("capacity", "90")]);

        let readings = SysfsSource::with_root(td.path()).try_list().unwrap();
        assert_eq!(readings, vec![BatteryReading::new("BAT1", 90.0, false)]);
    }

    #[test]
    fn test_missing_root_lists_nothing() {
        let td = TempDir::new().unwrap();
        let mut source = SysfsSource::with_root(td.path().join("missing"));

        assert!(source.try_list().is_err());
        assert!(source.list_batteries().is_empty());
    }
}
