use color_eyre::eyre::{eyre, Result};
use dualbat_engine::{derive_id, BatteryReading};
use tracing::{debug, trace, warn};
use zbus::blocking::Connection;
use zbus::zvariant::OwnedObjectPath;

use crate::source::{disambiguate_ids, BatterySource};
use crate::types::ChargeState;

/// UPower's `Type` value for a battery.
const DEVICE_TYPE_BATTERY: u32 = 2;

#[zbus::proxy(
    interface = "org.freedesktop.UPower",
    default_service = "org.freedesktop.UPower",
    default_path = "/org/freedesktop/UPower"
)]
trait UPower {
    fn enumerate_devices(&self) -> zbus::Result<Vec<OwnedObjectPath>>;
}

#[zbus::proxy(
    interface = "org.freedesktop.UPower.Device",
    default_service = "org.freedesktop.UPower"
)]
trait Device {
    #[zbus(property, name = "Type")]
    fn kind(&self) -> zbus::Result<u32>;

    #[zbus(property)]
    fn power_supply(&self) -> zbus::Result<bool>;

    #[zbus(property)]
    fn native_path(&self) -> zbus::Result<String>;

    #[zbus(property)]
    fn model(&self) -> zbus::Result<String>;

    #[zbus(property)]
    fn percentage(&self) -> zbus::Result<f64>;

    #[zbus(property)]
    fn state(&self) -> zbus::Result<u32>;
}

/// The `org.freedesktop.UPower.Device` properties a reading is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProperties {
    pub kind: u32,
    pub power_supply: bool,
    pub native_path: String,
    pub model: String,
    pub percentage: f64,
    pub state: u32,
}

impl DeviceProperties {
    fn fetch(device: &DeviceProxyBlocking<'_>) -> zbus::Result<Self> {
        Ok(Self {
            kind: device.kind()?,
            power_supply: device.power_supply()?,
            native_path: device.native_path()?,
            model: device.model()?,
            percentage: device.percentage()?,
            state: device.state()?,
        })
    }

    /// `None` for anything but a system battery: line power, UPS units and
    /// peripherals such as mice report other types or `PowerSupply = false`.
    pub fn into_reading(self, object_path: &str) -> Option<BatteryReading> {
        if self.kind != DEVICE_TYPE_BATTERY || !self.power_supply {
            return None;
        }

        let id = derive_id(
            Some(&self.native_path),
            Some(&self.model),
            Some(object_path),
        );
        let charging = ChargeState::from_upower_state(self.state).is_charging();
        Some(BatteryReading::new(id, self.percentage, charging))
    }
}

/// Reads batteries from the UPower daemon on the system bus.
///
/// The bus connection is opened on first use and reopened after a failed
/// poll, so a daemon restart is survived.
#[derive(Default)]
pub struct UPowerSource {
    connection: Option<Connection>,
}

impl UPowerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the system bus answers with a UPower service.
    pub fn is_available() -> bool {
        let probe = Connection::system().and_then(|connection| {
            let upower = UPowerProxyBlocking::new(&connection)?;
            upower.enumerate_devices()
        });
        match probe {
            Ok(devices) => {
                debug!(devices = devices.len(), "UPower is available");
                true
            }
            Err(e) => {
                debug!(error = %e, "UPower is not available");
                false
            }
        }
    }

    fn connection(&mut self) -> Result<&Connection> {
        if self.connection.is_none() {
            self.connection = Some(Connection::system()?);
        }
        self.connection
            .as_ref()
            .ok_or_else(|| eyre!("system bus unavailable"))
    }

    fn list_devices(connection: &Connection) -> Result<Vec<BatteryReading>> {
        let upower = UPowerProxyBlocking::new(connection)?;

        let mut readings = Vec::new();
        for path in upower.enumerate_devices()? {
            let device = DeviceProxyBlocking::builder(connection)
                .path(path.clone())?
                .build()?;

            match DeviceProperties::fetch(&device) {
                Ok(props) => {
                    trace!(path = %path.as_str(), ?props, "Read UPower device");
                    if let Some(reading) = props.into_reading(path.as_str()) {
                        readings.push(reading);
                    }
                }
                Err(e) => {
                    warn!(path = %path.as_str(), error = %e, "Skipping unreadable device");
                }
            }
        }

        disambiguate_ids(&mut readings);
        Ok(readings)
    }
}

impl BatterySource for UPowerSource {
    fn name(&self) -> &'static str {
        "upower"
    }

    fn try_list(&mut self) -> Result<Vec<BatteryReading>> {
        let result = Self::list_devices(self.connection()?);
        if result.is_err() {
            self.connection = None;
        }
        result
    }
}
