//! Shared types for the carousel module

use std::fmt;

/// Unique key for identifying carousels on a page.
/// Using a strongly-typed key avoids brittle id matching and gives each
/// instance its own scoped state and timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    Blog,
    Projects,
    Custom(&'static str),
}

impl CarouselKey {
    pub fn name(&self) -> &'static str {
        match self {
            CarouselKey::Blog => "blog",
            CarouselKey::Projects => "projects",
            CarouselKey::Custom(name) => name,
        }
    }
}

impl fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Host elements a carousel needs before it can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// Region whose pointer enter/leave pauses auto-advance.
    Region,
    /// Container translated to show the current page.
    Track,
    PrevControl,
    NextControl,
    /// Container whose children are replaced with one indicator per page.
    Indicators,
}

impl ElementRole {
    pub const ALL: [ElementRole; 5] = [
        ElementRole::Region,
        ElementRole::Track,
        ElementRole::PrevControl,
        ElementRole::NextControl,
        ElementRole::Indicators,
    ];
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementRole::Region => "region",
            ElementRole::Track => "track",
            ElementRole::PrevControl => "previous control",
            ElementRole::NextControl => "next control",
            ElementRole::Indicators => "indicator container",
        };
        f.write_str(name)
    }
}

/// Visual state of one page indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Active,
    Inactive,
}

impl IndicatorState {
    pub fn is_active(self) -> bool {
        matches!(self, IndicatorState::Active)
    }
}

/// Horizontal translation of the track, in percent of its own width.
/// Always zero or negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackOffset {
    pub percent: f32,
}

impl TrackOffset {
    pub const ZERO: TrackOffset = TrackOffset { percent: 0.0 };

    /// CSS `transform` value for hosts that style the track directly.
    pub fn css_transform(&self) -> String {
        // Page 0 yields -0.0.
        let percent = if self.percent == 0.0 { 0.0 } else { self.percent };
        format!("translateX({percent}%)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_transform_translates_by_percent() {
        assert_eq!(
            TrackOffset { percent: -50.0 }.css_transform(),
            "translateX(-50%)"
        );
        assert_eq!(
            TrackOffset { percent: -0.0 }.css_transform(),
            "translateX(0%)"
        );
        assert_eq!(TrackOffset::ZERO.css_transform(), "translateX(0%)");
    }

    #[test]
    fn custom_keys_display_their_name() {
        assert_eq!(CarouselKey::Blog.to_string(), "blog");
        assert_eq!(CarouselKey::Custom("talks").name(), "talks");
    }
}
