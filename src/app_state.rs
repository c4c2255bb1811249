//! The owning state for the page and both nav pipelines.
//!
//! A TUI needs a single source of truth that can be interrogated and
//! mutated as the viewer scrolls. `AppState` owns the rendered page, the
//! scroll viewport, and the two independent observers of the scroll
//! timeline: the activation tracker and the dial controller. Input events
//! sample scroll state at native frequency; the per-tick pipeline defers
//! all visual consequences to the next draw, which is the frame boundary
//! both pipelines batch across.

use crate::backdrop;
use crate::config::Config;
use crate::indicator::{DialController, DialState, FrameFlag};
use crate::observe::ViewportObserver;
use crate::section::Section;
use crate::tracker::{ActivationState, SectionTracker};
use crate::viewport::{ScrollAnimation, ScrollViewport};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

/// Rows moved per arrow key press.
const KEY_SCROLL_ROWS: f64 = 1.0;
/// Rows moved per mouse wheel notch.
const WHEEL_SCROLL_ROWS: f64 = 3.0;
/// Backdrop phase advance per draw tick.
const BACKDROP_PHASE_STEP: f64 = 0.35;

/// Single source of truth for the landing page session.
pub struct AppState {
    /// Raw page rows, styled at draw time.
    pub lines: Vec<String>,
    /// Nav sections in navigation order.
    pub sections: Vec<Section>,
    /// Window onto the page; the one producer of scroll state.
    pub viewport: ScrollViewport,
    /// Visibility observation over the section regions.
    pub observer: ViewportObserver,
    /// Decides the active section from visibility transitions.
    pub tracker: SectionTracker,
    /// The page-wide active-section value the nav renders from.
    pub activation: ActivationState,
    /// The dial cell the nav renders from; mutated only by the controller.
    pub dial: DialState,
    /// Coalesces scroll progress into one dial update per frame.
    pub controller: DialController,
    /// Frame callback flag the draw tick consumes.
    pub frame: FrameFlag,
    /// In-flight eased scroll after a nav jump, if any.
    pub animation: Option<ScrollAnimation>,
    /// Row band reserved for the hero backdrop, if the page has one.
    pub backdrop_band: Option<(usize, usize)>,
    /// Animation phase for the backdrop threads.
    pub backdrop_phase: f64,
    /// Set when the viewer asks to leave.
    pub should_quit: bool,
}

impl AppState {
    #[must_use]
    /// Builds the session state and registers the sections for observation.
    ///
    /// `viewport_height` is the initial content-area height; the first draw
    /// corrects it to the real terminal size.
    pub fn new(source: &str, sections: Vec<Section>, cfg: &Config, viewport_height: usize) -> Self {
        let lines: Vec<String> = source.lines().map(ToString::to_string).collect();
        let backdrop_band = find_backdrop_band(&lines);
        let viewport = ScrollViewport::new(viewport_height, lines.len(), cfg.margin_rows);

        let mut observer = ViewportObserver::new(cfg.activation_threshold);
        let mut tracker = SectionTracker::new(sections.len());
        tracker.register(&mut observer, &sections);

        Self {
            lines,
            sections,
            viewport,
            observer,
            tracker,
            activation: ActivationState::new(),
            dial: DialState::default(),
            controller: DialController::new(cfg.turn_degrees),
            frame: FrameFlag::default(),
            animation: None,
            backdrop_band,
            backdrop_phase: 0.0,
            should_quit: false,
        }
    }

    /// Routes a key press to scrolling, nav jumps, or quitting.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-KEY_SCROLL_ROWS),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(KEY_SCROLL_ROWS),
            KeyCode::PageUp => self.scroll_by(-(self.page_stride())),
            KeyCode::PageDown => self.scroll_by(self.page_stride()),
            KeyCode::Home => self.scroll_by(-self.viewport.offset),
            KeyCode::End => self.scroll_by(self.viewport.max_offset() - self.viewport.offset),
            KeyCode::Tab => self.jump_relative(1),
            KeyCode::BackTab => self.jump_relative(-1),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.scroll_to_section(index);
            }
            _ => {}
        }
    }

    /// Routes mouse wheel movement to scrolling.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_SCROLL_ROWS),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_SCROLL_ROWS),
            _ => {}
        }
    }

    /// Manual scroll: moves the window and samples progress for the dial.
    ///
    /// Cancels any nav-triggered animation so the viewer's hand always
    /// wins over an in-flight jump.
    pub fn scroll_by(&mut self, delta: f64) {
        self.animation = None;
        self.viewport.scroll_by(delta);
        self.controller
            .on_progress(self.viewport.progress(), &mut self.frame);
    }

    /// Starts an eased scroll that puts `index`'s heading at the window top.
    pub fn scroll_to_section(&mut self, index: usize) {
        let Some(section) = self.sections.get(index) else {
            return;
        };
        let target = (section.line_start as f64).min(self.viewport.max_offset());
        self.animation = Some(ScrollAnimation::new(
            self.viewport.offset,
            target,
            ScrollAnimation::DEFAULT_TICKS,
        ));
    }

    /// Jumps `step` sections forward or back from the active one.
    fn jump_relative(&mut self, step: i64) {
        let count = self.sections.len() as i64;
        if count == 0 {
            return;
        }
        let current = self.activation.active().map_or(0, |i| i as i64);
        let next = (current + step).rem_euclid(count);
        self.scroll_to_section(next as usize);
    }

    /// One draw tick: advance animation, deliver the visibility batch, and
    /// run the dial's frame callback if one was scheduled.
    pub fn on_tick(&mut self) {
        if let Some(animation) = &mut self.animation {
            let offset = animation.step();
            self.viewport.scroll_to(offset);
            self.controller
                .on_progress(self.viewport.progress(), &mut self.frame);
            if animation.finished() {
                self.animation = None;
            }
        }

        self.tracker
            .evaluate(&mut self.activation, &mut self.observer, &self.viewport);

        if std::mem::take(&mut self.frame.requested) {
            self.controller.on_frame(&mut self.dial);
        }

        self.backdrop_phase += BACKDROP_PHASE_STEP;
    }

    /// Adjusts to a new content-area height.
    pub fn resize(&mut self, height: usize) {
        if height != self.viewport.height {
            self.viewport.resize(height);
            self.controller
                .on_progress(self.viewport.progress(), &mut self.frame);
        }
    }

    /// Releases both pipelines' standing observation. Idempotent; safe to
    /// call in any unmount order.
    pub fn dispose(&mut self) {
        self.tracker.dispose(&mut self.observer);
        self.controller.dispose(&mut self.frame);
        self.animation = None;
    }

    fn page_stride(&self) -> f64 {
        (self.viewport.height.saturating_sub(1)).max(1) as f64
    }
}

/// Finds the contiguous band of backdrop marker rows, if present.
fn find_backdrop_band(lines: &[String]) -> Option<(usize, usize)> {
    let start = lines.iter().position(|l| l.trim() == backdrop::MARKER)?;
    let end = lines[start..]
        .iter()
        .position(|l| l.trim() != backdrop::MARKER)
        .map_or(lines.len(), |n| start + n);
    Some((start, end))
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
