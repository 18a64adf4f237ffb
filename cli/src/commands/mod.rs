mod config;
mod debug;
mod pipe;
mod status;
mod watch;

pub use config::run as run_config;
pub use debug::run as run_debug;
pub use pipe::run as run_pipe;
pub use status::run as run_status;
pub use watch::run as run_watch;

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use dualbat_engine::BatteryReading;
use dualbat_platform::{BatterySource, StaticSource};
use tracing::info;

use crate::config::UserConfig;

/// The configured source, or a fixed one read from a JSON fixture file.
pub fn open_source(config: &UserConfig, fixture: Option<&Path>) -> Result<Box<dyn BatterySource>> {
    match fixture {
        Some(path) => {
            let readings = read_fixture(path)?;
            info!(path = %path.display(), batteries = readings.len(), "Using fixture readings");
            Ok(Box::new(StaticSource::new(readings)))
        }
        None => Ok(dualbat_platform::open(config.source)),
    }
}

fn read_fixture(path: &Path) -> Result<Vec<BatteryReading>> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read fixture {}", path.display()))?;
    serde_json::from_str(&content)
        .wrap_err_with(|| format!("Invalid fixture {}", path.display()))
}
