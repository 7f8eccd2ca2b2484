//! Scroll-triggered reveal of page elements
//!
//! Elements are watched until they first become visible enough, then
//! revealed once and dropped from the watch list. Slide-up elements are
//! staggered by their position among their siblings.

use std::time::Duration;

use vitrine_config::NavigationSettings;

/// Reveal animation groups, each marked by its own class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealGroup {
    Fade,
    SlideUp,
    Timeline,
}

impl RevealGroup {
    /// Selector the host uses to collect elements of this group.
    pub fn selector(self) -> &'static str {
        match self {
            RevealGroup::Fade => ".fade-in",
            RevealGroup::SlideUp => ".slide-up",
            RevealGroup::Timeline => ".timeline-item",
        }
    }
}

/// Element box relative to the top of the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub top: f32,
    pub height: f32,
}

impl ViewportRect {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Fraction of the element inside the viewport once `bottom_margin`
    /// pixels are cut off its bottom edge.
    pub fn visible_ratio(
        &self,
        viewport_height: f32,
        bottom_margin: f32,
    ) -> f32 {
        let root_bottom = (viewport_height - bottom_margin).max(0.0);
        if self.height <= 0.0 {
            return if (0.0..=root_bottom).contains(&self.top) {
                1.0
            } else {
                0.0
            };
        }
        let top = self.top.max(0.0);
        let bottom = (self.top + self.height).min(root_bottom);
        (bottom - top).max(0.0) / self.height
    }
}

/// An element to mark visible, after `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub id: String,
    pub group: RevealGroup,
    pub delay: Duration,
}

/// Delay before a revealed element is shown.
pub fn stagger_delay(
    group: RevealGroup,
    sibling_index: usize,
    settings: &NavigationSettings,
) -> Duration {
    match group {
        RevealGroup::SlideUp => settings
            .reveal_stagger()
            .saturating_mul(u32::try_from(sibling_index).unwrap_or(u32::MAX)),
        RevealGroup::Fade | RevealGroup::Timeline => Duration::ZERO,
    }
}

#[derive(Debug, Clone)]
struct Watched {
    id: String,
    group: RevealGroup,
    sibling_index: usize,
}

/// Elements still waiting for their reveal, in registration order.
#[derive(Debug, Default)]
pub struct RevealTracker {
    watched: Vec<Watched>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching `id`. Registering an id again replaces the earlier
    /// entry.
    pub fn observe(
        &mut self,
        id: impl Into<String>,
        group: RevealGroup,
        sibling_index: usize,
    ) {
        let id = id.into();
        self.watched.retain(|item| item.id != id);
        self.watched.push(Watched {
            id,
            group,
            sibling_index,
        });
    }

    pub fn pending(&self) -> usize {
        self.watched.len()
    }

    pub fn is_watching(&self, id: &str) -> bool {
        self.watched.iter().any(|item| item.id == id)
    }

    /// Check every watched element against the viewport and return the
    /// ones that crossed the threshold. Revealed elements are no longer
    /// watched; elements `rect_of` cannot measure stay watched.
    pub fn scan<F>(
        &mut self,
        viewport_height: f32,
        settings: &NavigationSettings,
        mut rect_of: F,
    ) -> Vec<Reveal>
    where
        F: FnMut(&str) -> Option<ViewportRect>,
    {
        let mut revealed = Vec::new();
        self.watched.retain(|item| {
            let Some(rect) = rect_of(item.id.as_str()) else {
                return true;
            };
            let ratio = rect
                .visible_ratio(viewport_height, settings.reveal_bottom_margin);
            if ratio <= 0.0 || ratio < settings.reveal_threshold {
                return true;
            }
            revealed.push(Reveal {
                id: item.id.clone(),
                group: item.group,
                delay: stagger_delay(item.group, item.sibling_index, settings),
            });
            false
        });

        if !revealed.is_empty() {
            tracing::debug!(
                "revealed {} element(s), {} still watched",
                revealed.len(),
                self.watched.len()
            );
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const VIEWPORT: f32 = 800.0;

    #[test]
    fn bottom_margin_shrinks_the_visible_area() {
        // 100px tall, top at 700: 50px left above the 750px cut-off.
        let rect = ViewportRect::new(700.0, 100.0);
        assert_eq!(rect.visible_ratio(VIEWPORT, 50.0), 0.5);
        assert_eq!(rect.visible_ratio(VIEWPORT, 0.0), 1.0);
        let below = ViewportRect::new(760.0, 100.0);
        assert_eq!(below.visible_ratio(VIEWPORT, 50.0), 0.0);
        let above = ViewportRect::new(-50.0, 100.0);
        assert_eq!(above.visible_ratio(VIEWPORT, 50.0), 0.5);
    }

    #[test]
    fn slide_up_is_staggered_by_sibling_position() {
        let settings = NavigationSettings::default();
        assert_eq!(RevealGroup::SlideUp.selector(), ".slide-up");
        assert_eq!(
            stagger_delay(RevealGroup::SlideUp, 3, &settings),
            Duration::from_millis(300)
        );
        assert_eq!(
            stagger_delay(RevealGroup::Fade, 3, &settings),
            Duration::ZERO
        );
        assert_eq!(
            stagger_delay(RevealGroup::Timeline, 5, &settings),
            Duration::ZERO
        );
    }

    #[test]
    fn elements_reveal_once_past_the_threshold() {
        let settings = NavigationSettings::default();
        let mut tracker = RevealTracker::new();
        tracker.observe("about", RevealGroup::Fade, 0);
        tracker.observe("skill-2", RevealGroup::SlideUp, 2);
        tracker.observe("job-1", RevealGroup::Timeline, 0);

        let mut rects = HashMap::from([
            // 5% visible: below the 10% threshold.
            ("about", ViewportRect::new(740.0, 200.0)),
            ("skill-2", ViewportRect::new(300.0, 120.0)),
            ("job-1", ViewportRect::new(1_400.0, 150.0)),
        ]);

        let first =
            tracker.scan(VIEWPORT, &settings, |id| rects.get(id).copied());
        assert_eq!(
            first,
            vec![Reveal {
                id: "skill-2".into(),
                group: RevealGroup::SlideUp,
                delay: Duration::from_millis(200),
            }]
        );
        assert_eq!(tracker.pending(), 2);
        assert!(!tracker.is_watching("skill-2"));

        rects.insert("about", ViewportRect::new(600.0, 200.0));
        rects.insert("skill-2", ViewportRect::new(100.0, 120.0));
        let second =
            tracker.scan(VIEWPORT, &settings, |id| rects.get(id).copied());
        let ids: Vec<_> =
            second.iter().map(|reveal| reveal.id.as_str()).collect();
        assert_eq!(ids, vec!["about"]);
        assert!(tracker.is_watching("job-1"));
    }

    #[test]
    fn unmeasured_elements_stay_watched() {
        let settings = NavigationSettings::default();
        let mut tracker = RevealTracker::new();
        tracker.observe("hero", RevealGroup::Fade, 0);
        tracker.observe("hero", RevealGroup::Fade, 0);
        assert_eq!(tracker.pending(), 1);

        assert!(tracker.scan(VIEWPORT, &settings, |_| None).is_empty());
        assert!(tracker.is_watching("hero"));
    }
}
