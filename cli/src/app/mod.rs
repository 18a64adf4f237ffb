//! Application core for the interactive indicator.
//!
//! Holds the indicator, the active settings and the config watcher, and
//! decides when a recompute is due: on every poll interval, on every
//! settings toggle, and whenever the config file changes underneath us.

mod tui;

pub use tui::run_tui;

use std::time::{Duration, Instant};

use dualbat_engine::{DisplayConfig, PresentationSnapshot};
use dualbat_platform::BatterySource;
use tracing::{info, warn};

use crate::config::{persist_display, ConfigWatcher, UserConfig};
use crate::indicator::Indicator;
use crate::render::IconStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleName,
    ToggleIcon,
    Refresh,
    None,
}

pub struct App {
    pub config: UserConfig,
    pub icon_style: IconStyle,
    pub last_error: Option<String>,
    indicator: Indicator<Box<dyn BatterySource>>,
    watcher: ConfigWatcher,
    last_poll: Instant,
}

impl App {
    /// Creates the app and performs the first poll.
    pub fn new(config: UserConfig, source: Box<dyn BatterySource>, watcher: ConfigWatcher) -> Self {
        info!(
            source = source.name(),
            poll_interval_secs = config.poll_interval().as_secs(),
            "Initializing indicator"
        );

        let mut indicator = Indicator::new(source, config.display());
        indicator.refresh();

        Self {
            config,
            icon_style: IconStyle::Glyph,
            last_error: None,
            indicator,
            watcher,
            last_poll: Instant::now(),
        }
    }

    pub fn snapshot(&self) -> &PresentationSnapshot {
        self.indicator.snapshot()
    }

    pub fn source_name(&self) -> &'static str {
        self.indicator.source_name()
    }

    pub fn poll_interval(&self) -> Duration {
        self.config.poll_interval()
    }

    pub fn time_until_poll(&self) -> Duration {
        self.poll_interval().saturating_sub(self.last_poll.elapsed())
    }

    /// Runs any work that is due. Returns true if the snapshot changed.
    pub fn tick(&mut self) -> bool {
        if self.watcher.changed() {
            self.reload_settings();
            return true;
        }

        if self.last_poll.elapsed() >= self.poll_interval() {
            self.poll();
            return true;
        }

        false
    }

    /// Applies an action. Returns false when the app should exit.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::ToggleName => self.update_display(self.config.display().toggle_name()),
            Action::ToggleIcon => self.update_display(self.config.display().toggle_icon()),
            Action::Refresh => self.poll(),
            Action::None => {}
        }
        true
    }

    fn poll(&mut self) {
        self.indicator.refresh();
        self.last_poll = Instant::now();
    }

    fn reload_settings(&mut self) {
        let stored = UserConfig::load_from(self.watcher.path());
        info!(path = %self.watcher.path().display(), "Config file changed, reloading");
        self.apply_display(stored.display());
    }

    fn update_display(&mut self, display: DisplayConfig) {
        match persist_display(self.watcher.path(), display) {
            Ok(()) => {
                self.watcher.mark_seen();
                self.last_error = None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to save display settings");
                self.last_error = Some(format!("Could not save settings: {}", e));
            }
        }
        self.apply_display(display);
    }

    fn apply_display(&mut self, display: DisplayConfig) {
        self.config.set_display(display);
        self.indicator.apply_settings(display);
        self.last_poll = Instant::now();
    }
}
