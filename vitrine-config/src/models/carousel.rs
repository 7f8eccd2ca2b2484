use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One responsive rule: viewports strictly narrower than `below_width`
/// show `items_per_page` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct BreakpointRule {
    pub below_width: u32,
    pub items_per_page: usize,
}

/// Viewport width to items-per-page mapping.
///
/// Rules are evaluated in ascending `below_width` order and the first match
/// wins; widths at or above every rule use `fallback`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Breakpoints {
    pub rules: Vec<BreakpointRule>,
    pub fallback: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            rules: vec![
                BreakpointRule {
                    below_width: 768,
                    items_per_page: 1,
                },
                BreakpointRule {
                    below_width: 1024,
                    items_per_page: 2,
                },
            ],
            fallback: 3,
        }
    }
}

impl Breakpoints {
    /// Items shown at once for the given viewport width. Never below one.
    pub fn items_per_page(&self, viewport_width: u32) -> usize {
        self.rules
            .iter()
            .find(|rule| viewport_width < rule.below_width)
            .map(|rule| rule.items_per_page)
            .unwrap_or(self.fallback)
            .max(1)
    }
}

/// Host element identifiers a carousel binds to at mount time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ElementIds {
    pub region: String,
    pub track: String,
    pub prev: String,
    pub next: String,
    pub indicators: String,
}

impl ElementIds {
    /// Derive the conventional `<prefix>-carousel`, `<prefix>-track`, ...
    /// identifiers.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            region: format!("{prefix}-carousel"),
            track: format!("{prefix}-track"),
            prev: format!("{prefix}-prev"),
            next: format!("{prefix}-next"),
            indicators: format!("{prefix}-indicators"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            self.region.as_str(),
            self.track.as_str(),
            self.prev.as_str(),
            self.next.as_str(),
            self.indicators.as_str(),
        ]
        .into_iter()
    }
}

/// Resolved settings for one carousel instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CarouselSettings {
    pub elements: ElementIds,
    /// Class selector the host uses to enumerate items inside the track.
    pub item_selector: String,
    pub breakpoints: Breakpoints,
    pub auto_advance_ms: u64,
    /// When false the carousel never starts its auto-advance timer.
    pub autoplay: bool,
}

impl CarouselSettings {
    pub const BLOG_AUTO_ADVANCE_MS: u64 = 5_000;
    pub const PROJECTS_AUTO_ADVANCE_MS: u64 = 7_000;

    pub fn new(
        prefix: &str,
        item_selector: &str,
        auto_advance_ms: u64,
    ) -> Self {
        Self {
            elements: ElementIds::with_prefix(prefix),
            item_selector: item_selector.to_string(),
            breakpoints: Breakpoints::default(),
            auto_advance_ms,
            autoplay: true,
        }
    }

    /// Blog post carousel preset.
    pub fn blog() -> Self {
        Self::new("blog", ".blog-card", Self::BLOG_AUTO_ADVANCE_MS)
    }

    /// Project carousel preset.
    pub fn projects() -> Self {
        Self::new("projects", ".project-card", Self::PROJECTS_AUTO_ADVANCE_MS)
    }

    pub fn auto_advance_period(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}
