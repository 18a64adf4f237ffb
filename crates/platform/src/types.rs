//! Shared types for battery sources.

/// Battery charging state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChargeState {
    /// Battery is actively charging
    Charging,
    /// Battery is discharging (on battery power)
    Discharging,
    /// Battery is full
    Full,
    /// External power connected but not charging (e.g., charge limit reached)
    NotCharging,
    /// State cannot be determined
    #[default]
    Unknown,
}

impl ChargeState {
    /// Returns true if the battery is currently charging.
    pub fn is_charging(&self) -> bool {
        matches!(self, ChargeState::Charging)
    }

    /// Parse the kernel's `status` attribute.
    pub fn from_sysfs_status(status: &str) -> Self {
        let status = status.trim();
        if status.eq_ignore_ascii_case("Charging") {
            ChargeState::Charging
        } else if status.eq_ignore_ascii_case("Discharging") {
            ChargeState::Discharging
        } else if status.eq_ignore_ascii_case("Full") {
            ChargeState::Full
        } else if status.eq_ignore_ascii_case("Not charging") {
            ChargeState::NotCharging
        } else {
            ChargeState::Unknown
        }
    }

    /// Map UPower's `State` property (`org.freedesktop.UPower.Device`).
    pub fn from_upower_state(state: u32) -> Self {
        match state {
            1 => ChargeState::Charging,
            2 | 3 | 6 => ChargeState::Discharging,
            4 => ChargeState::Full,
            5 => ChargeState::NotCharging,
            _ => ChargeState::Unknown,
        }
    }
}

impl From<starship_battery::State> for ChargeState {
    fn from(state: starship_battery::State) -> Self {
        match state {
            starship_battery::State::Charging => ChargeState::Charging,
            starship_battery::State::Discharging => ChargeState::Discharging,
            starship_battery::State::Empty => ChargeState::Discharging,
            starship_battery::State::Full => ChargeState::Full,
            starship_battery::State::Unknown => ChargeState::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_charging_counts_as_charging() {
        assert!(ChargeState::Charging.is_charging());
        assert!(!ChargeState::Full.is_charging());
        assert!(!ChargeState::NotCharging.is_charging());
        assert!(!ChargeState::Unknown.is_charging());
    }

    #[test]
    fn test_sysfs_status_parsing() {
        assert_eq!(ChargeState::from_sysfs_status("Charging\n"), ChargeState::Charging);
        assert_eq!(ChargeState::from_sysfs_status("Discharging"), ChargeState::Discharging);
        assert_eq!(ChargeState::from_sysfs_status("Full"), ChargeState::Full);
        assert_eq!(ChargeState::from_sysfs_status("Not charging"), ChargeState::NotCharging);
        assert_eq!(ChargeState::from_sysfs_status("Unknown"), ChargeState::Unknown);
        assert_eq!(ChargeState::from_sysfs_status(""), ChargeState::Unknown);
    }

    #[test]
    fn test_upower_state_mapping() {
        assert_eq!(ChargeState::from_upower_state(1), ChargeState::Charging);
        assert_eq!(ChargeState::from_upower_state(2), ChargeState::Discharging);
        assert_eq!(ChargeState::from_upower_state(3), ChargeState::Discharging);
        assert_eq!(ChargeState::from_upower_state(4), ChargeState::Full);
        assert_eq!(ChargeState::from_upower_state(5), ChargeState::NotCharging);
        assert_eq!(ChargeState::from_upower_state(0), ChargeState::Unknown);
        assert_eq!(ChargeState::from_upower_state(42), ChargeState::Unknown);
    }

    #[test]
    fn test_battery_state_conversion() {
        assert_eq!(
            ChargeState::from(starship_battery::State::Charging),
            ChargeState::Charging
        );
        assert_eq!(
            ChargeState::from(starship_battery::State::Empty),
            ChargeState::Discharging
        );
        assert_eq!(
            ChargeState::from(starship_battery::State::Unknown),
            ChargeState::Unknown
        );
    }
}
