//! Visibility observation for registered page regions.
//!
//! The observer is the terminal stand-in for the browser's viewport
//! intersection facility: it watches a fixed ordered set of row bands and,
//! on each evaluation, reports only the bands whose intersecting state
//! changed since the previous evaluation. Entries are delivered in
//! registration order, which is what makes the tracker's last-entry-wins
//! rule deterministic for a given evaluation.

use crate::viewport::ScrollViewport;

#[derive(Clone, Copy)]
/// Row band of the page observed for visibility.
pub struct Region {
    /// First row of the band (inclusive).
    pub line_start: usize,
    /// Row past the end of the band (exclusive).
    pub line_end: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// One observed state change for one region.
pub struct IntersectionEntry {
    /// Position of the region in the registered list.
    pub index: usize,
    /// Fraction of the region inside the detection window, in `[0, 1]`.
    pub ratio: f64,
    /// Whether the region now meets the intersection threshold.
    pub is_intersecting: bool,
}

/// Watches registered regions and batches their visibility transitions.
pub struct ViewportObserver {
    threshold: f64,
    regions: Vec<Region>,
    was_intersecting: Vec<bool>,
}

impl ViewportObserver {
    #[must_use]
    /// Creates an observer with no regions registered.
    ///
    /// `threshold` is the minimum intersection ratio at which a region
    /// counts as intersecting.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            regions: Vec::new(),
            was_intersecting: Vec::new(),
        }
    }

    /// Replaces the observed set with `regions`.
    ///
    /// Any previously observed set is dropped wholesale, including its
    /// remembered intersecting flags, so re-registration never leaks stale
    /// observation state.
    pub fn observe(&mut self, regions: Vec<Region>) {
        self.was_intersecting = vec![false; regions.len()];
        self.regions = regions;
    }

    #[must_use]
    /// Number of regions currently observed.
    pub fn observed_count(&self) -> usize {
        self.regions.len()
    }

    /// Compares every region against the viewport and returns entries for
    /// those whose intersecting state changed, in registration order.
    ///
    /// The first evaluation after `observe` reports every region already
    /// inside the window as a rising transition, which seeds activation on
    /// mount.
    pub fn evaluate(&mut self, viewport: &ScrollViewport) -> Vec<IntersectionEntry> {
        let mut batch = Vec::new();
        for (index, region) in self.regions.iter().enumerate() {
            let ratio = viewport.intersection_ratio(region.line_start, region.line_end);
            let is_intersecting = ratio >= self.threshold;
            if is_intersecting != self.was_intersecting[index] {
                self.was_intersecting[index] = is_intersecting;
                batch.push(IntersectionEntry {
                    index,
                    ratio,
                    is_intersecting,
                });
            }
        }
        batch
    }

    /// Stops observing everything. Idempotent.
    pub fn disconnect(&mut self) {
        self.regions.clear();
        self.was_intersecting.clear();
    }
}

#[cfg(test)]
#[path = "tests/observe.rs"]
mod tests;
