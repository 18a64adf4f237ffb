//! Linux battery sources.

mod battery;
mod upower;

pub use battery::{SysfsSource, POWER_SUPPLY_PATH};
pub use upower::{DeviceProperties, UPowerSource};
