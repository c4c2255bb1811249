//! The UI renders the application state into the fixed nav and the page.
//!
//! The nav bar consumes the activation state (exactly one label highlighted
//! and underlined) and the dial cell (rotation shown as a spoke glyph). It
//! does no scroll math of its own. The page body is the visible slice of
//! styled markdown rows, with the animated backdrop overlaid on the hero
//! band when it scrolls into view.

use crate::app_state::AppState;
use crate::backdrop::{Backdrop, MARKER};
use crate::config::Config;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Needle directions for successive 45-degree arcs of dial rotation.
const DIAL_SPOKES: [char; 8] = ['↑', '↗', '→', '↘', '↓', '↙', '←', '↖'];

/// Renders the nav bar, the visible page slice, and the help bar.
pub fn draw(f: &mut Frame, app: &mut AppState, cfg: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    app.resize(chunks[1].height as usize);

    draw_nav(f, app, chunks[0]);
    draw_page(f, app, cfg, chunks[1]);
    draw_help(f, chunks[2]);
}

/// Maps a rotation angle to the nearest needle glyph.
#[must_use]
pub fn dial_glyph(angle: f64) -> char {
    let turn = angle.rem_euclid(360.0);
    let bucket = ((turn / 45.0).round() as usize) % DIAL_SPOKES.len();
    DIAL_SPOKES[bucket]
}

fn draw_nav(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!("({}) ", dial_glyph(app.dial.angle)),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            "Chronos",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
    ];

    for (i, section) in app.sections.iter().enumerate() {
        let style = if app.activation.is_active(i) {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(section.title.clone(), style));
        spans.push(Span::raw("  "));
    }

    let nav = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(nav, area);
}

fn draw_page(f: &mut Frame, app: &AppState, cfg: &Config, area: Rect) {
    let top = app.viewport.top_row();
    let rows = area.height as usize;
    let end = (top + rows).min(app.lines.len());

    let lines: Vec<Line> = app.lines[top.min(app.lines.len())..end]
        .iter()
        .map(String::as_str)
        .map(style_line)
        .collect();

    f.render_widget(Paragraph::new(lines), area);

    if let Some((band_start, band_end)) = app.backdrop_band {
        if band_start < end && band_end > top {
            let visible_start = band_start.max(top);
            let visible_end = band_end.min(end);
            let band = Rect {
                x: area.x,
                y: area.y + (visible_start - top) as u16,
                width: area.width,
                height: (visible_end - visible_start) as u16,
            };
            f.render_widget(
                Backdrop {
                    phase: app.backdrop_phase,
                    threads: cfg.backdrop_threads,
                    amplitude: cfg.backdrop_amplitude,
                },
                band,
            );
        }
    }
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help = "↑/↓ j/k: Scroll | PgUp/PgDn | Home/End | 1-9: Go to section | Tab: Next | q: Quit";
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}

/// Styles one raw source row by its markdown role.
fn style_line(raw: &str) -> Line<'static> {
    if raw.trim() == MARKER {
        return Line::raw("");
    }
    if let Some(text) = raw.strip_prefix("# ") {
        return Line::styled(
            text.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    }
    if let Some(text) = raw.strip_prefix("## ") {
        return Line::styled(
            text.to_string(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        );
    }
    if let Some(text) = raw.strip_prefix("> ") {
        return Line::styled(
            text.to_string(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        );
    }
    if let Some(text) = raw.strip_prefix("- ") {
        return Line::styled(format!("• {text}"), Style::default().fg(Color::Gray));
    }
    Line::raw(raw.to_string())
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
