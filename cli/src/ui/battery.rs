use dualbat_engine::BatteryLine;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::render::icons::render_tier;

use super::utils::{border_style, color_for_band, darken_color, BG, BORDER, FG, MUTED};

const ROW_HEIGHT: u16 = 1;

/// The dropdown: one gauge per battery, coloured by severity band.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();

    let block = Block::default()
        .title(" Batteries ")
        .borders(Borders::ALL)
        .border_style(border_style())
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(BG));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    if !snapshot.has_batteries {
        let empty = Paragraph::new(snapshot.summary_label.as_str())
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let constraints: Vec<Constraint> = snapshot
        .lines
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT + 1))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (line, row) in snapshot.lines.iter().zip(rows.iter()) {
        render_line(frame, *row, line, snapshot.show_icon, app);
    }
}

fn render_line(frame: &mut Frame, area: Rect, line: &BatteryLine, show_icon: bool, app: &App) {
    if area.height == 0 {
        return;
    }

    let label_width = (line.label.chars().count() as u16 + 3).min(area.width / 2);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(label_width), Constraint::Min(0)])
        .split(Rect {
            height: ROW_HEIGHT,
            ..area
        });

    let mut spans = Vec::new();
    if show_icon {
        spans.push(Span::styled(
            format!("{} ", render_tier(line.tier, app.icon_style)),
            Style::default().fg(color_for_band(line.band)),
        ));
    }
    spans.push(Span::styled(
        line.label.as_str(),
        Style::default().fg(FG).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(color_for_band(line.band))
                .bg(darken_color(BORDER, 0.6)),
        )
        .ratio(line.bar_fill_fraction.clamp(0.0, 1.0))
        .label(if line.charging { "charging" } else { "" })
        .use_unicode(true);
    frame.render_widget(gauge, chunks[1]);
}
