use super::AppState;
use crate::config::Config;
use crate::formats::markdown::MarkdownFormat;
use crate::input::extract_sections;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt::Write;

fn cfg() -> Config {
    Config {
        activation_threshold: 0.4,
        turn_degrees: 360.0,
        margin_rows: 0,
        frame_interval_ms: 16,
        backdrop_threads: 3,
        backdrop_amplitude: 1.0,
    }
}

/// Four sections of 25 rows each: heading plus 24 copy rows.
fn page() -> String {
    let mut source = String::new();
    for i in 0..4 {
        writeln!(source, "# Sec{i}").unwrap();
        for _ in 0..24 {
            source.push_str("copy\n");
        }
    }
    source
}

fn app() -> AppState {
    let source = page();
    let sections = extract_sections(&source, &MarkdownFormat).unwrap();
    AppState::new(&source, sections, &cfg(), 20)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_mount_activates_first_section() {
    let mut app = app();
    app.on_tick();
    assert_eq!(app.activation.active(), Some(0));
    assert!(approx(app.dial.angle, 0.0));
}

#[test]
fn test_scroll_to_bottom_activates_last_section() {
    let mut app = app();
    app.on_tick();
    app.scroll_by(1_000_000.0);
    app.on_tick();
    assert_eq!(app.activation.active(), Some(3));
    assert!(approx(app.dial.angle, 360.0), "full scroll is a full turn");
}

#[test]
fn test_wheel_burst_applies_once_with_last_value() {
    let mut app = app();
    for _ in 0..5 {
        app.scroll_by(3.0);
    }
    assert!(app.frame.requested, "burst queues a single frame");
    app.on_tick();
    // offset 15 of 80 scrollable rows.
    assert!(approx(app.dial.angle, 15.0 / 80.0 * 360.0));
    assert!(!app.frame.requested);
}

#[test]
fn test_nav_jump_eases_to_section_and_activates_it() {
    let mut app = app();
    app.on_tick();
    app.scroll_to_section(2);
    for _ in 0..20 {
        app.on_tick();
    }
    assert!(app.animation.is_none());
    assert!(approx(app.viewport.offset, 50.0));
    assert_eq!(app.activation.active(), Some(2));
}

#[test]
fn test_manual_scroll_cancels_jump() {
    let mut app = app();
    app.scroll_to_section(3);
    app.scroll_by(1.0);
    assert!(app.animation.is_none(), "the viewer's hand wins");
}

#[test]
fn test_quit_key() {
    let mut app = app();
    app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()));
    assert!(app.should_quit);
}

#[test]
fn test_digit_key_targets_section() {
    let mut first = app();
    first.handle_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::empty()));
    assert!(first.animation.is_some());

    // A digit past the section list is ignored.
    let mut other = app();
    other.handle_key(KeyEvent::new(KeyCode::Char('9'), KeyModifiers::empty()));
    assert!(other.animation.is_none());
}

#[test]
fn test_dispose_is_idempotent_and_detaches_everything() {
    let mut app = app();
    app.on_tick();
    let active_before = app.activation.active();
    let angle_before = app.dial.angle;

    app.dispose();
    app.dispose();
    assert_eq!(app.observer.observed_count(), 0);

    app.scroll_by(30.0);
    app.on_tick();
    assert_eq!(app.activation.active(), active_before);
    assert!(approx(app.dial.angle, angle_before));
    assert!(!app.frame.requested, "no pending callbacks after teardown");
}

#[test]
fn test_backdrop_band_located_from_markers() {
    let source = "# A\n%%threads\n%%threads\n%%threads\nbody\n";
    let sections = extract_sections(source, &MarkdownFormat).unwrap();
    let app = AppState::new(source, sections, &cfg(), 20);
    assert_eq!(app.backdrop_band, Some((1, 4)));
}

#[test]
fn test_resize_reclamps_and_resamples() {
    let mut app = app();
    app.scroll_by(1_000_000.0);
    app.on_tick();
    app.resize(60);
    app.on_tick();
    assert!(approx(app.viewport.offset, 40.0));
    assert!(approx(app.dial.angle, 360.0), "still at the page bottom");
}
