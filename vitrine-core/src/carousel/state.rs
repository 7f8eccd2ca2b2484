//! CarouselState: paging state for a fixed window over an item collection

use super::types::{IndicatorState, TrackOffset};

/// Page-based window over `item_count` items.
///
/// `current_page` stays within `0..page_count` whenever `page_count > 0`.
/// A carousel with no items has no pages; every navigation call is then a
/// no-op and the offset stays at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    item_count: usize,
    items_per_page: usize,
    page_count: usize,
    current_page: usize,
}

impl CarouselState {
    /// Create a state on page zero. `items_per_page` is floored at one.
    pub fn new(item_count: usize, items_per_page: usize) -> Self {
        let items_per_page = items_per_page.max(1);
        Self {
            item_count,
            items_per_page,
            page_count: item_count.div_ceil(items_per_page),
            current_page: 0,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// Change the page size, recompute the page count and clamp the current
    /// page into the new range. Returns true when the page count changed.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> bool {
        let items_per_page = items_per_page.max(1);
        let previous_pages = self.page_count;

        self.items_per_page = items_per_page;
        self.page_count = self.item_count.div_ceil(items_per_page);
        self.clamp_current();

        log_transition("resize", self);
        previous_pages != self.page_count
    }

    /// Advance one page, wrapping from the last page back to the first.
    pub fn next_page(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current_page = (self.current_page + 1) % self.page_count;
        log_transition("next", self);
    }

    /// Go back one page, wrapping from the first page to the last.
    pub fn prev_page(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current_page =
            (self.current_page + self.page_count - 1) % self.page_count;
        log_transition("prev", self);
    }

    /// Jump to `index`, silently clamped into `0..page_count`.
    pub fn go_to_page(&mut self, index: isize) {
        if self.is_empty() {
            return;
        }
        let last = self.page_count - 1;
        self.current_page = usize::try_from(index).map_or(0, |i| i.min(last));
        log_transition("goto", self);
    }

    /// Translation that brings the current page into view.
    pub fn offset(&self) -> TrackOffset {
        let page_width = 100.0 / self.items_per_page as f32;
        TrackOffset {
            percent: -(self.current_page as f32 * page_width),
        }
    }

    /// State of indicator `index`.
    pub fn indicator(&self, index: usize) -> IndicatorState {
        if index == self.current_page && !self.is_empty() {
            IndicatorState::Active
        } else {
            IndicatorState::Inactive
        }
    }

    /// One indicator state per page, in page order.
    pub fn indicators(&self) -> impl Iterator<Item = IndicatorState> + '_ {
        (0..self.page_count).map(|index| self.indicator(index))
    }

    fn clamp_current(&mut self) {
        self.current_page = match self.page_count {
            0 => 0,
            pages => self.current_page.min(pages - 1),
        };
    }
}

fn log_transition(action: &str, state: &CarouselState) {
    tracing::debug!(
        "carousel {}: page {}/{} (items_per_page={}, items={})",
        action,
        state.current_page,
        state.page_count,
        state.items_per_page,
        state.item_count
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(CarouselState::new(7, 3).page_count(), 3);
        assert_eq!(CarouselState::new(6, 3).page_count(), 2);
        assert_eq!(CarouselState::new(1, 3).page_count(), 1);
        assert_eq!(CarouselState::new(0, 3).page_count(), 0);
    }

    #[test]
    fn next_wraps_after_last_page() {
        let mut state = CarouselState::new(7, 3);
        let mut seen = Vec::new();
        for _ in 0..3 {
            state.next_page();
            seen.push(state.current_page());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn prev_wraps_to_last_page() {
        let mut state = CarouselState::new(7, 3);
        state.prev_page();
        assert_eq!(state.current_page(), 2);
        state.prev_page();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn go_to_clamps_both_ends() {
        let mut state = CarouselState::new(7, 3);
        state.go_to_page(99);
        assert_eq!(state.current_page(), 2);
        state.go_to_page(-4);
        assert_eq!(state.current_page(), 0);
        state.go_to_page(1);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn navigation_stays_in_range_for_mixed_sequences() {
        for items in 1..12 {
            for per_page in 1..4 {
                let mut state = CarouselState::new(items, per_page);
                let pages = state.page_count();
                for step in 0..40 {
                    if step % 3 == 0 {
                        state.prev_page();
                    } else {
                        state.next_page();
                    }
                    assert!(state.current_page() < pages);
                }
            }
        }
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut state = CarouselState::new(0, 2);
        state.next_page();
        state.prev_page();
        state.go_to_page(5);
        assert!(state.is_empty());
        assert_eq!(state.current_page(), 0);
        assert_eq!(state.offset(), TrackOffset::ZERO);
        assert_eq!(state.indicators().count(), 0);
    }

    #[test]
    fn shrinking_page_count_clamps_current_page() {
        // 7 items, one per page: seven pages, sit on the last.
        let mut state = CarouselState::new(7, 1);
        state.go_to_page(6);

        assert!(state.set_items_per_page(3));
        assert_eq!(state.page_count(), 3);
        assert_eq!(state.current_page(), 2);

        assert!(!state.set_items_per_page(3));
    }

    #[test]
    fn offset_is_page_times_page_width() {
        let mut state = CarouselState::new(7, 2);
        state.go_to_page(2);
        assert_eq!(state.offset().percent, -100.0);

        let mut state = CarouselState::new(9, 3);
        state.go_to_page(1);
        assert!((state.offset().percent + 100.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn exactly_one_indicator_is_active() {
        let mut state = CarouselState::new(10, 3);
        state.go_to_page(2);
        let indicators: Vec<_> = state.indicators().collect();
        assert_eq!(indicators.len(), 4);
        assert_eq!(indicators.iter().filter(|s| s.is_active()).count(), 1);
        assert!(indicators[2].is_active());
    }
}
