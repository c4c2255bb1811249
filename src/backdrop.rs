//! Decorative thread animation behind the hero block.
//!
//! Terminal stand-in for the page's animated thread background: a band of
//! drifting sine threads. The widget is opaque to the nav core: it takes
//! its configuration, renders itself into whatever area it is given, and
//! shares no state with the tracker or the dial.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

/// Marker line in the page source that reserves a row for the backdrop.
pub const MARKER: &str = "%%threads";

const THREAD_COLORS: [Color; 3] = [Color::DarkGray, Color::Gray, Color::White];

/// One frame of the animated thread band.
pub struct Backdrop {
    /// Animation phase, advanced by the event loop each tick.
    pub phase: f64,
    /// Number of threads drawn through the band.
    pub threads: usize,
    /// Vertical swing of each thread, in rows.
    pub amplitude: f64,
}

impl Widget for Backdrop {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let mid = f64::from(area.height - 1) / 2.0;
        for thread in 0..self.threads {
            let color = THREAD_COLORS[thread % THREAD_COLORS.len()];
            let thread_phase = self.phase + thread as f64 * 1.9;
            for x in 0..area.width {
                let t = f64::from(x) * 0.18 + thread_phase;
                let y = mid + self.amplitude * t.sin() * mid;
                let row = y.round().clamp(0.0, f64::from(area.height - 1)) as u16;
                buf[(area.x + x, area.y + row)]
                    .set_char('·')
                    .set_style(Style::default().fg(color));
            }
        }
    }
}
