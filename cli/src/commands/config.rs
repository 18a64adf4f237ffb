use color_eyre::eyre::Result;

use crate::config::{config_path, persist_display, UserConfig};

pub fn run(
    path: bool,
    reset: bool,
    edit: bool,
    show_name: Option<bool>,
    show_icon: Option<bool>,
) -> Result<()> {
    let config_file = config_path();

    if path {
        println!("{}", config_file.display());
        return Ok(());
    }

    if reset {
        let config = UserConfig::default();
        config.save()?;
        println!("Config reset to defaults at: {}", config_file.display());
        return Ok(());
    }

    if show_name.is_some() || show_icon.is_some() {
        let mut display = UserConfig::try_load_from(&config_file)?.display();
        if let Some(show_name) = show_name {
            display.show_name = show_name;
        }
        if let Some(show_icon) = show_icon {
            display.show_icon = show_icon;
        }
        persist_display(&config_file, display)?;
        println!(
            "show_name = {}, show_icon = {}",
            display.show_name, display.show_icon
        );
        return Ok(());
    }

    if edit {
        let editor = std::env::var("EDITOR").unwrap_or_else(|_| "nano".to_string());

        if !config_file.exists() {
            let config = UserConfig::default();
            config.save()?;
        }

        std::process::Command::new(editor)
            .arg(&config_file)
            .status()?;

        return Ok(());
    }

    let config = UserConfig::load();
    println!("Config file: {}", config_file.display());
    println!();
    println!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}
