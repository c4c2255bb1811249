//! Configuration to acknowledge viewer preferences as well as set defaults.
//!
//! Specifically, we try to find a chronos.toml, and if present we load
//! settings from there. This exposes the named tuning constants of the nav
//! core (activation threshold, dial turn, detection margin) alongside the
//! frame pacing and backdrop look.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// Viewer preferences loaded from chronos.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 0.4)]
    /// Fraction of a section that must be visible before it activates.
    pub activation_threshold: f64,
    #[facet(default = 360.0)]
    /// Dial rotation in degrees across a full-page scroll.
    pub turn_degrees: f64,
    #[facet(default = 0)]
    /// Rows added around the visible window when detecting sections.
    pub margin_rows: i64,
    #[facet(default = 16)]
    /// Milliseconds between draw ticks; 16 approximates a display refresh.
    pub frame_interval_ms: u64,
    #[facet(default = 3)]
    /// Number of animated threads in the hero backdrop.
    pub backdrop_threads: usize,
    #[facet(default = 1.0)]
    /// Vertical swing of the backdrop threads.
    pub backdrop_amplitude: f64,
}

impl Config {
    #[must_use]
    /// Load configuration from chronos.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("chronos.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
