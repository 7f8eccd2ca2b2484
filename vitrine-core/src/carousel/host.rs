//! Seam between the carousel logic and the page that renders it

use super::types::{ElementRole, IndicatorState, TrackOffset};

/// Page binding for one carousel instance.
///
/// Elements are resolved once through [`CarouselHost::bind`] when the
/// carousel mounts; afterwards the carousel only talks to the host through
/// the render calls, so tests can substitute a recording or mocked host.
#[cfg_attr(test, mockall::automock)]
pub trait CarouselHost {
    /// Resolve and retain the element with `id` for `role`.
    /// Returns false when the page has no such element.
    fn bind(&mut self, role: ElementRole, id: &str) -> bool;

    /// Number of items inside the bound track matching `selector`.
    fn count_items(&self, selector: &str) -> usize;

    /// Current viewport width in CSS pixels.
    fn viewport_width(&self) -> u32;

    /// Apply the track translation.
    fn render_track(&mut self, offset: TrackOffset);

    /// Drop every indicator and create `count` fresh, inactive ones.
    fn replace_indicators(&mut self, count: usize);

    fn set_indicator(&mut self, index: usize, state: IndicatorState);
}
