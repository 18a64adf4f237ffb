use dualbat_engine::{IconTier, SummaryIcon, TierLevel};

pub const MISSING_ICON_NAME: &str = "battery-missing-symbolic";

/// Nerd Font `battery-unknown`.
pub const MISSING_GLYPH: char = '\u{f0091}';

/// Nerd Font battery glyphs, one row per decile, `[discharging, charging]`.
const GLYPHS: [[char; 2]; 11] = [
    ['\u{f008e}', '\u{f089f}'],
    ['\u{f007a}', '\u{f089c}'],
    ['\u{f007b}', '\u{f0086}'],
    ['\u{f007c}', '\u{f0087}'],
    ['\u{f007d}', '\u{f0088}'],
    ['\u{f007e}', '\u{f089d}'],
    ['\u{f007f}', '\u{f0089}'],
    ['\u{f0080}', '\u{f089e}'],
    ['\u{f0081}', '\u{f008a}'],
    ['\u{f0082}', '\u{f008b}'],
    ['\u{f0079}', '\u{f0085}'],
];

/// How a renderer draws icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconStyle {
    /// Nerd Font glyphs, for terminals and text status bars.
    #[default]
    Glyph,
    /// Freedesktop symbolic icon names, for panels that resolve them.
    Name,
}

/// Symbolic icon name in the GNOME/Adwaita battery set.
pub fn tier_icon_name(tier: IconTier) -> String {
    match (tier.level, tier.charging) {
        (TierLevel::Full, false) => "battery-level-100-symbolic".to_string(),
        (TierLevel::Full, true) => "battery-level-100-charged-symbolic".to_string(),
        (level, false) => format!("battery-level-{}-symbolic", level.floor()),
        (level, true) => format!("battery-level-{}-charging-symbolic", level.floor()),
    }
}

pub fn summary_icon_name(icon: SummaryIcon) -> String {
    match icon {
        SummaryIcon::Tier(tier) => tier_icon_name(tier),
        SummaryIcon::Missing => MISSING_ICON_NAME.to_string(),
    }
}

pub fn tier_glyph(tier: IconTier) -> char {
    let row = usize::from(tier.level.floor() / 10).min(GLYPHS.len() - 1);
    GLYPHS[row][usize::from(tier.charging)]
}

pub fn summary_glyph(icon: SummaryIcon) -> char {
    icon.tier().map(tier_glyph).unwrap_or(MISSING_GLYPH)
}

pub fn render_tier(tier: IconTier, style: IconStyle) -> String {
    match style {
        IconStyle::Glyph => tier_glyph(tier).to_string(),
        IconStyle::Name => tier_icon_name(tier),
    }
}

pub fn render_summary(icon: SummaryIcon, style: IconStyle) -> String {
    match style {
        IconStyle::Glyph => summary_glyph(icon).to_string(),
        IconStyle::Name => summary_icon_name(icon),
    }
}
