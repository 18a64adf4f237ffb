use color_eyre::eyre::Result;
use dualbat_platform::BatterySource;

use crate::config::{ConfigWatcher, UserConfig};
use crate::render::json;
use crate::scheduler::{self, Flow};

pub fn run(
    config: &UserConfig,
    source: Box<dyn BatterySource>,
    watcher: ConfigWatcher,
    samples: u32,
    compact: bool,
) -> Result<()> {
    let mut counter = 0u32;

    scheduler::run(config, source, watcher, |snapshot, _| {
        println!("{}", json::to_json(snapshot, chrono::Utc::now(), compact)?);

        counter += 1;
        if samples > 0 && counter >= samples {
            Ok(Flow::Stop)
        } else {
            Ok(Flow::Continue)
        }
    })
}
