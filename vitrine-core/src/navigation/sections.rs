use vitrine_config::NavigationSettings;

/// Document-space vertical extent of a page section, in CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Scroll offset that puts `section_top` just below the header.
///
/// Falls back to the configured header height when the host could not
/// measure it. Never negative.
pub fn scroll_target(
    section_top: f32,
    header_height: Option<f32>,
    settings: &NavigationSettings,
) -> f32 {
    let header = header_height.unwrap_or(settings.fallback_header_height);
    (section_top - header - settings.scroll_padding).max(0.0)
}

/// Section highlighted in the navigation for the given scroll position.
///
/// A section is a candidate when it overlaps the activation band between
/// `active_band_top` and `active_band_bottom` of the viewport. When several
/// overlap, the last one in document order wins.
pub fn active_section<'a>(
    sections: &'a [SectionBounds],
    scroll_y: f32,
    viewport_height: f32,
    settings: &NavigationSettings,
) -> Option<&'a SectionBounds> {
    let band_top = scroll_y + viewport_height * settings.active_band_top;
    let band_bottom = scroll_y + viewport_height * settings.active_band_bottom;

    sections
        .iter()
        .rev()
        .find(|section| {
            section.top < band_bottom && section.bottom() > band_top
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            SectionBounds::new("projects", 1400.0, 900.0),
            SectionBounds::new("contact", 2300.0, 500.0),
        ]
    }

    #[test]
    fn scroll_target_accounts_for_header_and_padding() {
        let settings = NavigationSettings::default();
        assert_eq!(scroll_target(1400.0, Some(64.0), &settings), 1316.0);
        assert_eq!(scroll_target(1400.0, None, &settings), 1300.0);
        assert_eq!(scroll_target(40.0, None, &settings), 0.0);
    }

    #[test]
    fn top_of_page_activates_first_section() {
        let settings = NavigationSettings::default();
        let sections = page();
        let active = active_section(&sections, 0.0, 1000.0, &settings);
        assert_eq!(active.map(|s| s.id.as_str()), Some("home"));
    }

    #[test]
    fn band_inside_a_section_selects_it() {
        let settings = NavigationSettings::default();
        let sections = page();
        // Band spans 1700..1800.
        let active = active_section(&sections, 1500.0, 1000.0, &settings);
        assert_eq!(active.map(|s| s.id.as_str()), Some("projects"));
    }

    #[test]
    fn straddling_band_prefers_later_section() {
        let settings = NavigationSettings::default();
        let sections = page();
        // Band spans 750..850, overlapping home and about.
        let active = active_section(&sections, 550.0, 1000.0, &settings);
        assert_eq!(active.map(|s| s.id.as_str()), Some("about"));
    }

    #[test]
    fn no_sections_no_active() {
        let settings = NavigationSettings::default();
        assert!(active_section(&[], 0.0, 1000.0, &settings).is_none());
    }
}
