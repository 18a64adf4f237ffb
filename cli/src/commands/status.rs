use color_eyre::eyre::Result;
use dualbat_engine::recompute;
use dualbat_platform::BatterySource;

use crate::config::UserConfig;
use crate::render::{text, IconStyle};

pub fn run(config: &UserConfig, mut source: Box<dyn BatterySource>, icon_names: bool, verbose: bool) -> Result<()> {
    let style = if icon_names { IconStyle::Name } else { IconStyle::Glyph };
    let readings = source.list_batteries();
    let snapshot = recompute(&readings, config.display());

    println!("{}", text::panel_line(&snapshot, style));
    if verbose {
        for line in text::dropdown_lines(&snapshot, style) {
            println!("  {}", line);
        }
    }

    Ok(())
}
