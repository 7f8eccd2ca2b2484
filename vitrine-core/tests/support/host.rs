//! In-memory carousel host that records every render call.

use vitrine_core::{CarouselHost, ElementRole, IndicatorState, TrackOffset};

#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub missing: Vec<ElementRole>,
    pub bound: Vec<(ElementRole, String)>,
    pub items: usize,
    pub width: u32,
    pub offsets: Vec<TrackOffset>,
    pub indicators: Vec<IndicatorState>,
    pub rebuilds: usize,
}

#[allow(dead_code)]
impl RecordingHost {
    pub fn new(items: usize, width: u32) -> Self {
        Self {
            items,
            width,
            ..Self::default()
        }
    }

    /// Host whose page lacks the element for `role`.
    pub fn without(mut self, role: ElementRole) -> Self {
        self.missing.push(role);
        self
    }

    pub fn last_offset(&self) -> Option<TrackOffset> {
        self.offsets.last().copied()
    }

    /// Inline style a DOM host would write for the latest offset.
    pub fn last_transform(&self) -> Option<String> {
        self.last_offset().map(|offset| offset.css_transform())
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_active())
            .map(|(index, _)| index)
            .collect()
    }
}

impl CarouselHost for RecordingHost {
    fn bind(&mut self, role: ElementRole, id: &str) -> bool {
        if self.missing.contains(&role) {
            return false;
        }
        self.bound.push((role, id.to_string()));
        true
    }

    fn count_items(&self, _selector: &str) -> usize {
        self.items
    }

    fn viewport_width(&self) -> u32 {
        self.width
    }

    fn render_track(&mut self, offset: TrackOffset) {
        self.offsets.push(offset);
    }

    fn replace_indicators(&mut self, count: usize) {
        self.indicators = vec![IndicatorState::Inactive; count];
        self.rebuilds += 1;
    }

    fn set_indicator(&mut self, index: usize, state: IndicatorState) {
        if let Some(slot) = self.indicators.get_mut(index) {
            *slot = state;
        }
    }
}
