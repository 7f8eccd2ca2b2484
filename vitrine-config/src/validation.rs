use thiserror::Error;

use crate::models::{
    NavigationSettings, SiteConfig,
    carousel::{Breakpoints, CarouselSettings},
};

/// Configuration values the core refuses to run with.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("{carousel}: auto_advance_ms must be greater than zero")]
    ZeroAutoAdvance { carousel: &'static str },
    #[error(
        "{carousel}: items_per_page must be at least one (rule below {below_width}px)"
    )]
    ZeroItemsPerPage {
        carousel: &'static str,
        below_width: u32,
    },
    #[error("{carousel}: breakpoint fallback must be at least one")]
    ZeroFallback { carousel: &'static str },
    #[error(
        "{carousel}: breakpoint widths must be strictly ascending ({previous}px then {current}px)"
    )]
    UnsortedBreakpoints {
        carousel: &'static str,
        previous: u32,
        current: u32,
    },
    #[error("{carousel}: element ids must not be blank")]
    BlankElementId { carousel: &'static str },
    #[error("{carousel}: item selector must not be blank")]
    BlankItemSelector { carousel: &'static str },
    #[error(
        "navigation: active band must satisfy 0 <= top < bottom <= 1 (got {top}..{bottom})"
    )]
    InvalidActiveBand { top: f32, bottom: f32 },
    #[error("navigation: reveal threshold must be in (0, 1] (got {0})")]
    InvalidRevealThreshold(f32),
    #[error("navigation: reveal bottom margin must not be negative (got {0})")]
    NegativeRevealMargin(f32),
}

/// Run every guard rail and return the first violation.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigGuardRailError> {
    validate_carousel("blog", &config.blog)?;
    validate_carousel("projects", &config.projects)?;
    validate_navigation(&config.navigation)
}

pub fn validate_carousel(
    carousel: &'static str,
    settings: &CarouselSettings,
) -> Result<(), ConfigGuardRailError> {
    if settings.auto_advance_ms == 0 {
        return Err(ConfigGuardRailError::ZeroAutoAdvance { carousel });
    }
    if settings.elements.iter().any(|id| id.trim().is_empty()) {
        return Err(ConfigGuardRailError::BlankElementId { carousel });
    }
    if settings.item_selector.trim().is_empty() {
        return Err(ConfigGuardRailError::BlankItemSelector { carousel });
    }
    validate_breakpoints(carousel, &settings.breakpoints)
}

fn validate_breakpoints(
    carousel: &'static str,
    breakpoints: &Breakpoints,
) -> Result<(), ConfigGuardRailError> {
    if breakpoints.fallback == 0 {
        return Err(ConfigGuardRailError::ZeroFallback { carousel });
    }
    for rule in &breakpoints.rules {
        if rule.items_per_page == 0 {
            return Err(ConfigGuardRailError::ZeroItemsPerPage {
                carousel,
                below_width: rule.below_width,
            });
        }
    }
    for pair in breakpoints.rules.windows(2) {
        if pair[0].below_width >= pair[1].below_width {
            return Err(ConfigGuardRailError::UnsortedBreakpoints {
                carousel,
                previous: pair[0].below_width,
                current: pair[1].below_width,
            });
        }
    }
    Ok(())
}

fn validate_navigation(
    nav: &NavigationSettings,
) -> Result<(), ConfigGuardRailError> {
    let (top, bottom) = (nav.active_band_top, nav.active_band_bottom);
    let in_unit = |value: f32| (0.0..=1.0).contains(&value);
    if !in_unit(top) || !in_unit(bottom) || top >= bottom {
        return Err(ConfigGuardRailError::InvalidActiveBand { top, bottom });
    }
    let threshold = nav.reveal_threshold;
    if threshold <= 0.0 || !in_unit(threshold) {
        return Err(ConfigGuardRailError::InvalidRevealThreshold(threshold));
    }
    let margin = nav.reveal_bottom_margin;
    if margin.is_nan() || margin < 0.0 {
        return Err(ConfigGuardRailError::NegativeRevealMargin(margin));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::carousel::BreakpointRule;

    #[test]
    fn defaults_pass() {
        assert_eq!(validate(&SiteConfig::default()), Ok(()));
    }

    #[test]
    fn zero_period_is_rejected() {
        let mut config = SiteConfig::default();
        config.projects.auto_advance_ms = 0;
        assert_eq!(
            validate(&config),
            Err(ConfigGuardRailError::ZeroAutoAdvance {
                carousel: "projects"
            })
        );
    }

    #[test]
    fn duplicate_breakpoint_widths_are_rejected() {
        let mut config = SiteConfig::default();
        config.blog.breakpoints.rules = vec![
            BreakpointRule {
                below_width: 800,
                items_per_page: 1,
            },
            BreakpointRule {
                below_width: 800,
                items_per_page: 2,
            },
        ];
        assert!(matches!(
            validate(&config),
            Err(ConfigGuardRailError::UnsortedBreakpoints {
                carousel: "blog",
                ..
            })
        ));
    }

    #[test]
    fn blank_ids_are_rejected() {
        let mut config = SiteConfig::default();
        config.blog.elements.prev = "  ".into();
        assert_eq!(
            validate(&config),
            Err(ConfigGuardRailError::BlankElementId { carousel: "blog" })
        );
    }

    #[test]
    fn inverted_band_is_rejected() {
        let mut config = SiteConfig::default();
        config.navigation.active_band_top = 0.5;
        config.navigation.active_band_bottom = 0.4;
        assert!(matches!(
            validate(&config),
            Err(ConfigGuardRailError::InvalidActiveBand { .. })
        ));
    }

    #[test]
    fn reveal_threshold_must_be_a_positive_fraction() {
        let mut config = SiteConfig::default();
        config.navigation.reveal_threshold = 0.0;
        assert_eq!(
            validate(&config),
            Err(ConfigGuardRailError::InvalidRevealThreshold(0.0))
        );
        config.navigation.reveal_threshold = 1.0;
        config.navigation.reveal_bottom_margin = -5.0;
        assert_eq!(
            validate(&config),
            Err(ConfigGuardRailError::NegativeRevealMargin(-5.0))
        );
    }
}
