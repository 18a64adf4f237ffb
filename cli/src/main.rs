mod app;
mod cli;
mod commands;
mod config;
mod indicator;
mod input;
mod logging;
mod render;
mod scheduler;
mod ui;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::warn;

use app::App;
use cli::{Cli, Commands};
use config::{config_path, ensure_dirs, ConfigWatcher, LogLevel, UserConfig};
use logging::LogMode;

fn main() -> Result<()> {
    color_eyre::install()?;
    let dirs_result = ensure_dirs();

    let cli = Cli::parse();
    let mut config = UserConfig::load();
    config.merge_with_args(cli.source, None);
    let log_level_override = cli.log_level.as_deref().map(LogLevel::from_str);

    let log_mode = match cli.command {
        None | Some(Commands::Ui) => LogMode::File,
        Some(_) => LogMode::Stderr,
    };
    let log_guard = logging::init(config.log_level, log_mode, log_level_override);

    if let Err(e) = dirs_result {
        warn!(error = %e, "Failed to create config directory");
    }

    let fixture = cli.fixture.as_deref();

    match cli.command {
        Some(Commands::Status {
            icon_names,
            verbose,
        }) => {
            let source = commands::open_source(&config, fixture)?;
            commands::run_status(&config, source, icon_names, verbose)
        }
        Some(Commands::Watch { json, icon_names }) => {
            let source = commands::open_source(&config, fixture)?;
            let watcher = ConfigWatcher::new(config_path());
            commands::run_watch(&config, source, watcher, json, icon_names)
        }
        Some(Commands::Pipe {
            samples,
            interval,
            compact,
        }) => {
            config.merge_with_args(None, interval);
            let source = commands::open_source(&config, fixture)?;
            let watcher = ConfigWatcher::new(config_path());
            commands::run_pipe(&config, source, watcher, samples, compact)
        }
        Some(Commands::Debug) => {
            let source = commands::open_source(&config, fixture)?;
            commands::run_debug(&config, source)
        }
        Some(Commands::Config {
            path,
            reset,
            edit,
            show_name,
            show_icon,
        }) => commands::run_config(path, reset, edit, show_name, show_icon),
        Some(Commands::Ui) | None => {
            let source = commands::open_source(&config, fixture)?;
            let watcher = ConfigWatcher::new(config_path());
            let mut app = App::new(config, source, watcher);
            if let Some(e) = log_guard.file_error() {
                app.last_error = Some(format!("Logging disabled: {}", e));
            }
            app::run_tui(app)
        }
    }
}
