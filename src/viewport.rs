//! Scroll state for the page viewport.
//!
//! The viewport is the single producer of scroll state that both nav
//! pipelines observe: the activation tracker reads per-section intersection
//! ratios from it and the dial controller reads normalised scroll progress.
//! Offsets are fractional rows so that eased animation steps land between
//! rows without accumulating rounding drift.

/// Window onto the page buffer, tracking scroll offset in fractional rows.
pub struct ScrollViewport {
    /// Current scroll offset from the top of the page, in rows.
    pub offset: f64,
    /// Visible height of the content area, in rows.
    pub height: usize,
    /// Total height of the rendered page, in rows.
    pub content_height: usize,
    /// Rows added above and below the visible window when computing
    /// intersection ratios. Zero means the detection region is exactly the
    /// visible window.
    pub margin_rows: i64,
}

impl ScrollViewport {
    #[must_use]
    /// Creates a viewport at the top of the page.
    pub fn new(height: usize, content_height: usize, margin_rows: i64) -> Self {
        Self {
            offset: 0.0,
            height,
            content_height,
            margin_rows,
        }
    }

    #[must_use]
    /// Largest reachable offset; zero when the page fits the viewport.
    pub fn max_offset(&self) -> f64 {
        self.content_height.saturating_sub(self.height) as f64
    }

    /// Moves the window by `delta` rows, clamped to the page bounds.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.offset + delta);
    }

    /// Moves the window to `offset`, clamped to the page bounds.
    pub fn scroll_to(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    /// Adjusts the visible height after a terminal resize, re-clamping the
    /// offset so the window never hangs past the page end.
    pub fn resize(&mut self, height: usize) {
        self.height = height;
        self.scroll_to(self.offset);
    }

    #[must_use]
    /// Normalised scroll position across the scrollable range, in `[0, 1]`.
    ///
    /// Defined as `0.0` when the page is not scrollable, so the dial rests
    /// at its origin on short pages regardless of any scroll attempt.
    pub fn progress(&self) -> f64 {
        let range = self.max_offset();
        if range <= 0.0 {
            0.0
        } else {
            (self.offset / range).clamp(0.0, 1.0)
        }
    }

    #[must_use]
    /// First fully-addressed page row of the visible window.
    pub fn top_row(&self) -> usize {
        self.offset.floor() as usize
    }

    #[must_use]
    /// Fraction of the row band `[line_start, line_end)` inside the
    /// detection window, relative to the band's own height.
    ///
    /// The ratio is against the section's own extent, so a band much taller
    /// than the window tops out below `1.0`.
    pub fn intersection_ratio(&self, line_start: usize, line_end: usize) -> f64 {
        let band = line_end.saturating_sub(line_start) as f64;
        if band <= 0.0 {
            return 0.0;
        }
        let margin = self.margin_rows as f64;
        let win_top = self.offset - margin;
        let win_bottom = self.offset + self.height as f64 + margin;
        let overlap = (line_end as f64).min(win_bottom) - (line_start as f64).max(win_top);
        (overlap / band).clamp(0.0, 1.0)
    }
}

/// Eased scroll used when a nav label is selected.
///
/// Runs over a fixed number of draw ticks with ease-out cubic shaping, the
/// terminal stand-in for the page's smooth `scrollIntoView`. A fast
/// animation step may carry the window across several sections inside one
/// evaluation batch; the tracker's last-entry-wins rule covers that case.
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    ticks_total: u32,
    ticks_done: u32,
}

impl ScrollAnimation {
    /// Draw ticks a nav-triggered scroll takes from start to finish.
    pub const DEFAULT_TICKS: u32 = 12;

    #[must_use]
    /// Starts an animation between two offsets.
    pub fn new(from: f64, to: f64, ticks_total: u32) -> Self {
        Self {
            from,
            to,
            ticks_total: ticks_total.max(1),
            ticks_done: 0,
        }
    }

    /// Advances one tick and returns the offset to apply.
    pub fn step(&mut self) -> f64 {
        self.ticks_done = (self.ticks_done + 1).min(self.ticks_total);
        let t = f64::from(self.ticks_done) / f64::from(self.ticks_total);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    /// Whether the animation has reached its target.
    pub fn finished(&self) -> bool {
        self.ticks_done >= self.ticks_total
    }
}

#[cfg(test)]
#[path = "tests/viewport.rs"]
mod tests;
