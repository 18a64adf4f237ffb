use serde::{Deserialize, Serialize};

/// User-facing display preferences.
///
/// Passed by value into every [`recompute`](crate::recompute) call, so a
/// settings change always swaps both flags at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Prefix each label with the battery identifier (`BAT0: 47%`).
    pub show_name: bool,
    /// Ask the renderer to draw a tier icon next to each line.
    pub show_icon: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_name: true,
            show_icon: true,
        }
    }
}

impl DisplayConfig {
    pub fn new(show_name: bool, show_icon: bool) -> Self {
        Self {
            show_name,
            show_icon,
        }
    }

    pub fn toggle_name(self) -> Self {
        Self {
            show_name: !self.show_name,
            ..self
        }
    }

    pub fn toggle_icon(self) -> Self {
        Self {
            show_icon: !self.show_icon,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_show_everything() {
        let config = DisplayConfig::default();
        assert!(config.show_name);
        assert!(config.show_icon);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: DisplayConfig = serde_json::from_str(r#"{"show_icon": false}"#).unwrap();
        assert!(config.show_name);
        assert!(!config.show_icon);
    }

    #[test]
    fn test_toggles_touch_one_flag() {
        let config = DisplayConfig::default().toggle_name();
        assert_eq!(config, DisplayConfig::new(false, true));

        let config = config.toggle_icon();
        assert_eq!(config, DisplayConfig::new(false, false));
    }
}
