use vitrine_config::NavigationSettings;

/// Header styling derived from the page scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    /// At the top of the page: translucent, no shadow.
    #[default]
    Resting,
    /// Scrolled past the threshold: raised with a shadow and stronger blur.
    Scrolled,
}

impl HeaderState {
    pub fn from_scroll(scroll_y: f32, threshold: f32) -> Self {
        if scroll_y > threshold {
            HeaderState::Scrolled
        } else {
            HeaderState::Resting
        }
    }

    pub fn from_settings(scroll_y: f32, settings: &NavigationSettings) -> Self {
        Self::from_scroll(scroll_y, settings.header_scroll_threshold)
    }

    pub fn has_shadow(self) -> bool {
        matches!(self, HeaderState::Scrolled)
    }

    /// Background alpha the header uses in this state.
    pub fn background_alpha(self) -> f32 {
        match self {
            HeaderState::Resting => 0.8,
            HeaderState::Scrolled => 0.95,
        }
    }

    /// Backdrop blur radius in pixels.
    pub fn blur_px(self) -> u32 {
        match self {
            HeaderState::Resting => 5,
            HeaderState::Scrolled => 10,
        }
    }
}

/// Coalesces scroll events into at most one header update per frame.
#[derive(Debug, Default)]
pub struct HeaderTracker {
    state: HeaderState,
    frame_requested: bool,
}

impl HeaderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Record a scroll event. Returns true when the host should request an
    /// animation frame; false while one is already outstanding.
    pub fn on_scroll(&mut self) -> bool {
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Animation frame callback: settle the state for the current offset.
    /// Returns the new state when it changed.
    pub fn on_frame(
        &mut self,
        scroll_y: f32,
        settings: &NavigationSettings,
    ) -> Option<HeaderState> {
        self.frame_requested = false;
        let next = HeaderState::from_settings(scroll_y, settings);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(HeaderState::from_scroll(50.0, 50.0), HeaderState::Resting);
        assert_eq!(HeaderState::from_scroll(50.5, 50.0), HeaderState::Scrolled);
        assert!(HeaderState::Scrolled.has_shadow());
        assert!(!HeaderState::Resting.has_shadow());
    }

    #[test]
    fn tracker_requests_one_frame_per_burst() {
        let settings = NavigationSettings::default();
        let mut tracker = HeaderTracker::new();

        assert!(tracker.on_scroll());
        assert!(!tracker.on_scroll());
        assert!(!tracker.on_scroll());

        assert_eq!(
            tracker.on_frame(120.0, &settings),
            Some(HeaderState::Scrolled)
        );
        assert!(tracker.on_scroll());
        assert_eq!(tracker.on_frame(130.0, &settings), None);
        assert_eq!(tracker.state(), HeaderState::Scrolled);
    }
}
