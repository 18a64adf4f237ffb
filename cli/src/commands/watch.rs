use color_eyre::eyre::Result;
use dualbat_platform::BatterySource;
use tracing::debug;

use crate::config::{ConfigWatcher, UserConfig};
use crate::render::{json, text, IconStyle};
use crate::scheduler::{self, Flow};

pub fn run(
    config: &UserConfig,
    source: Box<dyn BatterySource>,
    watcher: ConfigWatcher,
    as_json: bool,
    icon_names: bool,
) -> Result<()> {
    let style = if icon_names { IconStyle::Name } else { IconStyle::Glyph };

    scheduler::run(config, source, watcher, |snapshot, trigger| {
        debug!(?trigger, "Printing snapshot");
        if as_json {
            println!("{}", json::to_json(snapshot, chrono::Utc::now(), true)?);
        } else {
            println!("{}", text::panel_line(snapshot, style));
        }
        Ok(Flow::Continue)
    })
}
