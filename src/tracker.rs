//! The section activation tracker: which nav label is current.
//!
//! Activation is decided by visibility transitions, not by comparing raw
//! scroll offsets: a section becomes active the moment it is reported
//! crossing into intersection, and stays active until another section
//! crosses in. Nothing demotes the active section when it leaves the
//! window, which keeps the nav steady while scrolling in either direction.
//!
//! When several sections cross in within one batch (a fast nav-triggered
//! scroll can do this), the last entry in list order wins. Exact
//! simultaneity is not observable from the host, so this is an accepted
//! race, not an error.

use crate::observe::{IntersectionEntry, Region, ViewportObserver};
use crate::section::Section;
use crate::viewport::ScrollViewport;

/// The single page-wide "current section" value.
///
/// Owned by the caller and handed to the tracker and the nav view
/// explicitly, so the tracker stays mountable more than once and testable
/// without globals.
#[derive(Default)]
pub struct ActivationState {
    active: Option<usize>,
}

impl ActivationState {
    #[must_use]
    /// Starts unset; no label is highlighted before the first crossing.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Index of the active section, if any crossing has been observed.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    /// Whether `index` is the active section.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    fn set(&mut self, index: usize) {
        self.active = Some(index);
    }
}

/// Maintains the active-section index from visibility transition batches.
pub struct SectionTracker {
    expected: usize,
    registered: usize,
    disposed: bool,
}

impl SectionTracker {
    #[must_use]
    /// Creates a tracker expecting `expected` sections to be registered.
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            registered: 0,
            disposed: false,
        }
    }

    /// Begins observing `sections`, replacing any previously observed set.
    pub fn register(&mut self, observer: &mut ViewportObserver, sections: &[Section]) {
        let regions = sections
            .iter()
            .map(|s| Region {
                line_start: s.line_start,
                line_end: s.line_end,
            })
            .collect();
        observer.observe(regions);
        self.registered = sections.len();
        self.disposed = false;
    }

    /// Runs one evaluation cycle: gathers the observer's transition batch
    /// and applies it to `state`.
    ///
    /// If the registered count does not match the expected count the cycle
    /// is skipped entirely rather than risking an index into a partial set.
    /// This self-heals once registration catches up, so it is logged at
    /// debug level only.
    pub fn evaluate(
        &mut self,
        state: &mut ActivationState,
        observer: &mut ViewportObserver,
        viewport: &ScrollViewport,
    ) {
        if self.disposed {
            return;
        }
        if self.registered != self.expected || observer.observed_count() != self.expected {
            tracing::debug!(
                registered = self.registered,
                expected = self.expected,
                "section count mismatch, skipping activation cycle"
            );
            return;
        }
        let batch = observer.evaluate(viewport);
        self.on_entries(state, &batch);
    }

    /// Applies one transition batch to `state`.
    ///
    /// Only rising transitions change activation; the last rising entry in
    /// the batch wins. Entries with indices outside the registered list are
    /// ignored.
    pub fn on_entries(&self, state: &mut ActivationState, entries: &[IntersectionEntry]) {
        if self.disposed {
            return;
        }
        for entry in entries {
            if entry.is_intersecting && entry.index < self.expected {
                state.set(entry.index);
            }
        }
    }

    /// Detaches all observation. Idempotent; later calls are no-ops.
    pub fn dispose(&mut self, observer: &mut ViewportObserver) {
        observer.disconnect();
        self.registered = 0;
        self.disposed = true;
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
