use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::input::keys;
use crate::render::icons::render_summary;

use super::utils::{color_for_band, ACCENT, BG, BORDER, DANGER, FG, MUTED};

/// Top line: what a panel would show.
pub fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();

    let mut left_spans = vec![Span::styled(" dualbat ", Style::default().fg(ACCENT))];
    if snapshot.show_icon {
        left_spans.push(Span::styled(
            format!("{} ", render_summary(snapshot.summary_icon, app.icon_style)),
            Style::default().fg(FG),
        ));
    }
    let label_color = snapshot.worst_band().map(color_for_band).unwrap_or(FG);
    left_spans.push(Span::styled(
        snapshot.summary_label.as_str(),
        Style::default().fg(label_color),
    ));
    if snapshot.any_charging() {
        left_spans.push(Span::styled(" (charging)", Style::default().fg(MUTED)));
    }

    let right_text = format!("v{} · {} ", super::VERSION, app.source_name());

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let right_width = right_text.chars().count();
    let padding = (area.width as usize).saturating_sub(left_width + right_width);

    let mut spans = left_spans;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(right_text, Style::default().fg(MUTED)));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(BG));
    frame.render_widget(bar, area);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let names = if app.config.show_name { "on" } else { "off" };
    let icons = if app.config.show_icon { "on" } else { "off" };

    let hints: Vec<(&str, String)> = vec![
        (keys::NAMES, format!("names ({})", names)),
        (keys::ICONS, format!("icons ({})", icons)),
        (keys::REFRESH, "refresh".to_string()),
        (keys::QUIT, "quit".to_string()),
    ];

    let mut left_spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            left_spans.push(Span::styled(" │ ", Style::default().fg(BORDER)));
        }
        left_spans.push(Span::styled(*key, Style::default().fg(ACCENT)));
        left_spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(MUTED),
        ));
    }

    let right_spans: Vec<Span> = match &app.last_error {
        Some(error) => vec![Span::styled(format!("{} ", error), Style::default().fg(DANGER))],
        None => vec![Span::styled(
            format!("next poll in {}s ", app.time_until_poll().as_secs()),
            Style::default().fg(MUTED),
        )],
    };

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let right_width: usize = right_spans.iter().map(|s| s.width()).sum();
    let padding = (area.width as usize).saturating_sub(left_width + right_width);

    left_spans.push(Span::raw(" ".repeat(padding)));
    left_spans.extend(right_spans);

    let bar = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(BG))
        .alignment(Alignment::Left);

    frame.render_widget(bar, area);
}
