pub mod carousel;
pub mod sources;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use carousel::CarouselSettings;

/// Fully resolved site behavior configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    pub blog: CarouselSettings,
    pub projects: CarouselSettings,
    pub search: SearchSettings,
    pub navigation: NavigationSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            blog: CarouselSettings::blog(),
            projects: CarouselSettings::projects(),
            search: SearchSettings::default(),
            navigation: NavigationSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Turn auto-advance off for every carousel (reduced-motion hosts).
    pub fn disable_autoplay(&mut self) {
        self.blog.autoplay = false;
        self.projects.autoplay = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchSettings {
    /// Quiet window after the last keystroke before a query is applied.
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Header and in-page navigation tuning. Distances are CSS pixels.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Scroll offset past which the header switches to its raised style.
    pub header_scroll_threshold: f32,
    /// Header height assumed when the host cannot measure it.
    pub fallback_header_height: f32,
    /// Extra gap kept between the header and a scrolled-to section.
    pub scroll_padding: f32,
    /// Top edge of the activation band, as a fraction of viewport height.
    pub active_band_top: f32,
    /// Bottom edge of the activation band, as a fraction of viewport height.
    pub active_band_bottom: f32,
    /// Visible fraction at which a reveal element is shown.
    pub reveal_threshold: f32,
    /// Strip at the bottom of the viewport that does not count as visible.
    pub reveal_bottom_margin: f32,
    /// Per-sibling delay for staggered reveals.
    pub reveal_stagger_ms: u64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            header_scroll_threshold: 50.0,
            fallback_header_height: 80.0,
            scroll_padding: 20.0,
            active_band_top: 0.2,
            active_band_bottom: 0.3,
            reveal_threshold: 0.1,
            reveal_bottom_margin: 50.0,
            reveal_stagger_ms: 100,
        }
    }
}

impl NavigationSettings {
    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }
}
