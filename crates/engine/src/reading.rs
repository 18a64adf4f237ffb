//! Raw battery readings as supplied by a reading source.

use serde::{Deserialize, Serialize};

/// A single battery reading, exactly as the source reported it.
///
/// Nothing here is trusted: the engine rounds and clamps `percentage` and
/// substitutes a generated name for an empty `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryReading {
    /// Stable identifier such as `BAT0`. May be empty.
    #[serde(default)]
    pub id: String,
    /// Charge level as reported, nominally 0-100.
    pub percentage: f64,
    #[serde(default)]
    pub charging: bool,
}

impl BatteryReading {
    pub fn new(id: impl Into<String>, percentage: f64, charging: bool) -> Self {
        Self {
            id: id.into(),
            percentage,
            charging,
        }
    }
}

/// Picks an identifier from the naming sources a provider exposes.
///
/// Order: last segment of the device path (`/sys/.../BAT0` gives `BAT0`),
/// then the model string, then the opaque object path. Returns an empty
/// string when every source is blank; the engine then generates
/// `Battery N`.
pub fn derive_id(
    native_path: Option<&str>,
    model: Option<&str>,
    object_path: Option<&str>,
) -> String {
    let suffix = native_path
        .map(|p| p.trim().trim_end_matches('/'))
        .and_then(|p| p.rsplit('/').next())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    if let Some(suffix) = suffix {
        return suffix.to_string();
    }

    [model, object_path]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}
