use color_eyre::eyre::{eyre, Result};
use dualbat_engine::{derive_id, BatteryReading};
use starship_battery::units::ratio::percent;
use starship_battery::Manager;
use tracing::{debug, warn};

use crate::source::{disambiguate_ids, BatterySource};
use crate::types::ChargeState;

/// Cross-platform source backed by `starship-battery`.
///
/// The manager is created lazily, so a provider that comes up after
/// start-up is picked up on the next poll.
pub struct StarshipSource {
    manager: Option<Manager>,
}

impl StarshipSource {
    pub fn new() -> Self {
        let manager = match Manager::new() {
            Ok(manager) => Some(manager),
            Err(e) => {
                debug!(error = %e, "starship-battery manager unavailable at start-up");
                None
            }
        };
        Self { manager }
    }

    fn manager(&mut self) -> Result<&Manager> {
        if self.manager.is_none() {
            self.manager = Some(Manager::new()?);
        }
        self.manager
            .as_ref()
            .ok_or_else(|| eyre!("battery manager unavailable"))
    }
}

impl Default for StarshipSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BatterySource for StarshipSource {
    fn name(&self) -> &'static str {
        "starship"
    }

    fn try_list(&mut self) -> Result<Vec<BatteryReading>> {
        let batteries = self.manager()?.batteries()?;

        let mut readings = Vec::new();
        for (index, battery) in batteries.enumerate() {
            let battery = match battery {
                Ok(battery) => battery,
                Err(e) => {
                    warn!(index, error = %e, "Skipping unreadable battery");
                    continue;
                }
            };

            let serial = match (battery.vendor(), battery.serial_number()) {
                (Some(vendor), Some(serial)) => Some(format!("{} {}", vendor.trim(), serial.trim())),
                (None, Some(serial)) => Some(serial.trim().to_string()),
                _ => None,
            };
            let id = derive_id(None, battery.model(), serial.as_deref());
            let state = ChargeState::from(battery.state());

            readings.push(BatteryReading::new(
                id,
                f64::from(battery.state_of_charge().get::<percent>()),
                state.is_charging(),
            ));
        }

        disambiguate_ids(&mut readings);
        Ok(readings)
    }
}
