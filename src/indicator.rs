//! The progress-driven dial controller: scroll progress to rotation angle.
//!
//! Scroll input arrives at native event frequency, potentially many times
//! per draw tick. The controller coalesces bursts: it keeps at most one
//! frame callback scheduled, and calls arriving while one is queued only
//! overwrite the value that callback will apply. The dial therefore
//! mutates at most once per frame no matter how fast input arrives, and
//! always with the newest value.
//!
//! The dial cell is mutated imperatively through [`DialSurface`], outside
//! the declarative draw path, and is owned exclusively by this controller.

/// Host facility for requesting a single callback on the next frame.
pub trait FrameScheduler {
    /// Requests one callback on the next frame.
    fn schedule_once(&mut self);
    /// Withdraws a previously requested callback, if any.
    fn cancel(&mut self);
}

/// Mutation target for the dial's rotation transform.
pub trait DialSurface {
    /// Sets the dial's rotation in degrees.
    fn set_rotation(&mut self, degrees: f64);
}

#[derive(Default)]
/// The one dial cell the nav renders from.
pub struct DialState {
    /// Current rotation in degrees, within `[0, 360]` for a full-turn dial.
    pub angle: f64,
}

impl DialSurface for DialState {
    fn set_rotation(&mut self, degrees: f64) {
        self.angle = degrees;
    }
}

#[derive(Default)]
/// Event-loop [`FrameScheduler`]: a flag the next draw tick consumes.
pub struct FrameFlag {
    /// Whether a frame callback is wanted.
    pub requested: bool,
}

impl FrameScheduler for FrameFlag {
    fn schedule_once(&mut self) {
        self.requested = true;
    }

    fn cancel(&mut self) {
        self.requested = false;
    }
}

/// Converts scroll progress into throttled dial rotation updates.
pub struct DialController {
    turn_degrees: f64,
    pending: Option<f64>,
    frame_queued: bool,
    disposed: bool,
}

impl DialController {
    #[must_use]
    /// Creates a controller mapping full progress to `turn_degrees`.
    pub fn new(turn_degrees: f64) -> Self {
        Self {
            turn_degrees,
            pending: None,
            frame_queued: false,
            disposed: false,
        }
    }

    /// Accepts the latest scroll progress.
    ///
    /// Progress is clamped to `[0, 1]` first; overscroll bounce can push
    /// raw values outside the range and must never rotate the dial past a
    /// full turn. Schedules a frame only if none is already queued.
    pub fn on_progress(&mut self, latest: f64, scheduler: &mut impl FrameScheduler) {
        if self.disposed {
            return;
        }
        self.pending = Some(latest.clamp(0.0, 1.0));
        if !self.frame_queued {
            scheduler.schedule_once();
            self.frame_queued = true;
        }
    }

    /// The frame callback: applies the pending progress to the dial, if any.
    pub fn on_frame(&mut self, dial: &mut impl DialSurface) {
        if self.disposed {
            return;
        }
        self.frame_queued = false;
        if let Some(progress) = self.pending.take() {
            dial.set_rotation(progress * self.turn_degrees);
        }
    }

    /// Cancels any pending update and detaches from the progress source.
    /// Idempotent; later calls are no-ops.
    pub fn dispose(&mut self, scheduler: &mut impl FrameScheduler) {
        if self.frame_queued {
            scheduler.cancel();
            self.frame_queued = false;
        }
        self.pending = None;
        self.disposed = true;
    }
}

#[cfg(test)]
#[path = "tests/indicator.rs"]
mod tests;
