//! Section representation for the rendered landing page.
//!
//! A section is a named, contiguous vertical band of page rows, one per
//! top-level heading in the page source. The list order of sections defines
//! navigation order; row coordinates define the detection region the
//! activation tracker observes.

use serde::Serialize;

#[derive(Clone, Serialize)]
/// Named vertical band of the page with the row extent used for detection.
pub struct Section {
    /// Stable identity used for nav targeting, slugged from the title.
    pub id: String,
    /// Heading text without markup symbols, shown as the nav label.
    pub title: String,
    /// Heading depth in the source (1 for top-level).
    pub level: usize,
    /// First page row of the section, including its heading line.
    pub line_start: usize,
    /// Row where the next section begins or the page ends (exclusive).
    pub line_end: usize,
}

impl Section {
    #[must_use]
    /// Number of page rows the section spans.
    pub fn height(&self) -> usize {
        self.line_end.saturating_sub(self.line_start)
    }
}

/// Lowercases a title and joins its words with hyphens for use as an id.
///
/// Mirrors how the page's anchor ids are written ("Acerca de" becomes
/// "acerca-de").
#[must_use]
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
