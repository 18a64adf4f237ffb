use color_eyre::eyre::Result;
use dualbat_engine::recompute;
use dualbat_platform::BatterySource;

use crate::config::{config_path, runtime_dir, UserConfig};
use crate::render::{text, IconStyle};

pub fn run(config: &UserConfig, mut source: Box<dyn BatterySource>) -> Result<()> {
    println!("dualbat debug information");
    println!("{}", "=".repeat(60));

    println!("\n--- Source ---");
    println!("Configured: {}", config.source);
    println!("Active: {}", source.name());

    println!("\n--- Raw Readings ---");
    let readings = match source.try_list() {
        Ok(readings) => readings,
        Err(e) => {
            println!("Error: {:#}", e);
            Vec::new()
        }
    };
    if readings.is_empty() {
        println!("(none)");
    }
    for (i, reading) in readings.iter().enumerate() {
        println!(
            "#{} id={:?} percentage={} charging={}",
            i + 1,
            reading.id,
            reading.percentage,
            reading.charging
        );
    }

    println!("\n--- Snapshot ---");
    let snapshot = recompute(&readings, config.display());
    println!("Panel: {}", text::panel_line(&snapshot, IconStyle::Name));
    for line in text::dropdown_lines(&snapshot, IconStyle::Name) {
        println!("  {}", line);
    }

    println!("\n--- Paths ---");
    println!("Config: {}", config_path().display());
    println!("Logs: {}", runtime_dir().display());

    println!("\n--- Current Config ---");
    println!("{}", toml::to_string_pretty(config)?);

    Ok(())
}
