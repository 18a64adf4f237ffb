use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use dualbat_engine::DisplayConfig;
use dualbat_platform::SourceKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn, Level};

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
pub const MIN_POLL_INTERVAL_SECS: u64 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" => LogLevel::Off,
            "error" => LogLevel::Error,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Warn,
        }
    }

    pub fn as_tracing_level(&self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub show_name: bool,
    pub show_icon: bool,
    pub poll_interval_secs: u64,
    pub source: SourceKind,
    pub log_level: LogLevel,
}

impl Default for UserConfig {
    fn default() -> Self {
        let display = DisplayConfig::default();
        Self {
            show_name: display.show_name,
            show_icon: display.show_icon,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            source: SourceKind::Auto,
            log_level: LogLevel::Warn,
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("dualbat")
}

pub fn runtime_dir() -> PathBuf {
    dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("dualbat")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn ensure_dirs() -> std::io::Result<()> {
    fs::create_dir_all(config_dir())
}

impl UserConfig {
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Missing or unparsable files yield the defaults.
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
            Self::default()
        })
    }

    /// Like [`load_from`](Self::load_from), but a file that exists and
    /// cannot be read or parsed is an error. Only a missing file yields the
    /// defaults.
    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    pub fn display(&self) -> DisplayConfig {
        DisplayConfig::new(self.show_name, self.show_icon)
    }

    pub fn set_display(&mut self, display: DisplayConfig) {
        self.show_name = display.show_name;
        self.show_icon = display.show_icon;
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(MIN_POLL_INTERVAL_SECS))
    }

    pub fn merge_with_args(&mut self, source: Option<SourceKind>, interval_secs: Option<u64>) {
        if let Some(source) = source {
            self.source = source;
        }
        if let Some(secs) = interval_secs {
            self.poll_interval_secs = secs;
        }
    }
}

/// Store new display flags in the file at `path`, leaving its other keys
/// untouched. A broken file is left as it is and reported.
pub fn persist_display(path: &Path, display: DisplayConfig) -> Result<(), ConfigError> {
    let mut stored = UserConfig::try_load_from(path)?;
    stored.set_display(display);
    stored.save_to(path)
}

/// Detects edits to the config file by comparing modification times.
///
/// A change carries no payload; callers re-read the whole file.
pub struct ConfigWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
}

impl ConfigWatcher {
    pub fn new(path: PathBuf) -> Self {
        let last_modified = modified_time(&path);
        Self {
            path,
            last_modified,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true once per observed change, including creation and removal.
    pub fn changed(&mut self) -> bool {
        let current = modified_time(&self.path);
        if current != self.last_modified {
            self.last_modified = current;
            true
        } else {
            false
        }
    }

    /// Forget a change we caused ourselves.
    pub fn mark_seen(&mut self) {
        self.last_modified = modified_time(&self.path);
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn bump_mtime(path: &Path, secs: u64) {
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(secs))
            .unwrap();
    }

    #[test]
    fn test_defaults() {
        let config = UserConfig::default();
        assert!(config.show_name);
        assert!(config.show_icon);
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.display(), DisplayConfig::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("config.toml");

        let mut config = UserConfig::default();
        config.set_display(DisplayConfig::new(false, true));
        config.source = SourceKind::Starship;
        config.save_to(&path).unwrap();

        assert_eq!(UserConfig::load_from(&path), config);
    }

    #[test]
    fn test_persist_display_keeps_other_keys() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("nested").join("config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "poll_interval_secs = 10\nsource = \"sysfs\"\n").unwrap();

        persist_display(&path, DisplayConfig::new(false, true)).unwrap();

        let stored = UserConfig::load_from(&path);
        assert_eq!(stored.display(), DisplayConfig::new(false, true));
        assert_eq!(stored.poll_interval_secs, 10);
        assert_eq!(stored.source, SourceKind::Sysfs);
    }

    #[test]
    fn test_persist_display_refuses_to_clobber_a_broken_file() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("config.toml");
        let original = "poll_interval_secs = 5\nsource = \"sysfs\"\nshow_name = maybe\n";
        fs::write(&path, original).unwrap();

        let result = persist_display(&path, DisplayConfig::new(false, true));

        assert!(matches!(result, Err(ConfigError::Parse(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_persist_display_creates_a_missing_file() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("config.toml");

        persist_display(&path, DisplayConfig::new(true, false)).unwrap();

        let stored = UserConfig::try_load_from(&path).unwrap();
        assert_eq!(stored.display(), DisplayConfig::new(true, false));
        assert_eq!(stored.poll_interval_secs, DEFAULT_POLL_INTERVAL_SECS);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("config.toml");
        fs::write(&path, "show_icon = false\n").unwrap();

        let config = UserConfig::load_from(&path);
        assert_eq!(config.display(), DisplayConfig::new(true, false));
        assert_eq!(config.poll_interval_secs, DEFAULT_POLL_INTERVAL_SECS);
    }

    #[test]
    fn test_invalid_or_missing_file_gives_defaults() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("config.toml");
        assert_eq!(UserConfig::load_from(&path), UserConfig::default());

        fs::write(&path, "show_name = \"maybe\"").unwrap();
        assert_eq!(UserConfig::load_from(&path), UserConfig::default());
    }

    #[test]
    fn test_poll_interval_has_a_floor() {
        let mut config = UserConfig::default();
        config.merge_with_args(None, Some(0));
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("off"), LogLevel::Off);
        assert_eq!(LogLevel::from_str("bogus"), LogLevel::Warn);
        assert_eq!(LogLevel::Off.as_tracing_level(), None);
    }

    #[test]
    fn test_watcher_sees_edits_once() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("config.toml");
        UserConfig::default().save_to(&path).unwrap();

        let mut watcher = ConfigWatcher::new(path.clone());
        assert!(!watcher.changed());

        bump_mtime(&path, 5);
        assert!(watcher.changed());
        assert!(!watcher.changed());

        fs::remove_file(&path).unwrap();
        assert!(watcher.changed());
    }

    #[test]
    fn test_mark_seen_swallows_own_writes() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("config.toml");
        let mut watcher = ConfigWatcher::new(path.clone());

        UserConfig::default().save_to(&path).unwrap();
        watcher.mark_seen();
        assert!(!watcher.changed());
    }
}
