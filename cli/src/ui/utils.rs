use dualbat_engine::SeverityBand;
use ratatui::style::{Color, Style};

pub const BG: Color = Color::Rgb(30, 30, 46);
pub const FG: Color = Color::Rgb(205, 214, 244);
pub const ACCENT: Color = Color::Rgb(137, 180, 250);
pub const MUTED: Color = Color::Rgb(108, 112, 134);
pub const BORDER: Color = Color::Rgb(69, 71, 90);
pub const SUCCESS: Color = Color::Rgb(166, 227, 161);
pub const WARNING: Color = Color::Rgb(250, 179, 135);
pub const DANGER: Color = Color::Rgb(243, 139, 168);

/// Bar colour for a severity band.
pub fn color_for_band(band: SeverityBand) -> Color {
    match band {
        SeverityBand::High => SUCCESS,
        SeverityBand::Medium => WARNING,
        SeverityBand::Low => DANGER,
    }
}

pub fn border_style() -> Style {
    Style::default().fg(BORDER)
}

pub fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        ),
        _ => Color::Rgb(40, 40, 45),
    }
}
