use serde::{Deserialize, Serialize};

use crate::util::parse_bool_var;

use super::{
    NavigationSettings, SearchSettings, SiteConfig,
    carousel::{Breakpoints, CarouselSettings, ElementIds},
};

/// Raw configuration as written in a TOML or JSON file. Every field is
/// optional and falls back to the matching preset.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub blog: FileCarouselConfig,
    #[serde(default)]
    pub projects: FileCarouselConfig,
    #[serde(default)]
    pub search: FileSearchConfig,
    #[serde(default)]
    pub navigation: FileNavigationConfig,
    pub autoplay: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileCarouselConfig {
    /// Shorthand for the five `<prefix>-*` element ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<ElementIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Breakpoints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_advance_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl FileCarouselConfig {
    /// Layer these overrides on top of `preset`. Explicit `elements` win
    /// over `id_prefix`.
    pub fn apply_to(self, mut preset: CarouselSettings) -> CarouselSettings {
        if let Some(prefix) = self.id_prefix {
            preset.elements = ElementIds::with_prefix(&prefix);
        }
        if let Some(elements) = self.elements {
            preset.elements = elements;
        }
        if let Some(selector) = self.item_selector {
            preset.item_selector = selector;
        }
        if let Some(breakpoints) = self.breakpoints {
            preset.breakpoints = breakpoints;
        }
        if let Some(ms) = self.auto_advance_ms {
            preset.auto_advance_ms = ms;
        }
        if let Some(autoplay) = self.autoplay {
            preset.autoplay = autoplay;
        }
        preset
    }
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileSearchConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileNavigationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_scroll_threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_header_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_band_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_band_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal_threshold: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal_bottom_margin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal_stagger_ms: Option<u64>,
}

impl FileConfig {
    pub fn into_site_config(self) -> SiteConfig {
        let search_defaults = SearchSettings::default();
        let nav_defaults = NavigationSettings::default();

        let mut config = SiteConfig {
            blog: self.blog.apply_to(CarouselSettings::blog()),
            projects: self.projects.apply_to(CarouselSettings::projects()),
            search: SearchSettings {
                debounce_ms: self
                    .search
                    .debounce_ms
                    .unwrap_or(search_defaults.debounce_ms),
            },
            navigation: NavigationSettings {
                header_scroll_threshold: self
                    .navigation
                    .header_scroll_threshold
                    .unwrap_or(nav_defaults.header_scroll_threshold),
                fallback_header_height: self
                    .navigation
                    .fallback_header_height
                    .unwrap_or(nav_defaults.fallback_header_height),
                scroll_padding: self
                    .navigation
                    .scroll_padding
                    .unwrap_or(nav_defaults.scroll_padding),
                active_band_top: self
                    .navigation
                    .active_band_top
                    .unwrap_or(nav_defaults.active_band_top),
                active_band_bottom: self
                    .navigation
                    .active_band_bottom
                    .unwrap_or(nav_defaults.active_band_bottom),
                reveal_threshold: self
                    .navigation
                    .reveal_threshold
                    .unwrap_or(nav_defaults.reveal_threshold),
                reveal_bottom_margin: self
                    .navigation
                    .reveal_bottom_margin
                    .unwrap_or(nav_defaults.reveal_bottom_margin),
                reveal_stagger_ms: self
                    .navigation
                    .reveal_stagger_ms
                    .unwrap_or(nav_defaults.reveal_stagger_ms),
            },
        };

        if self.autoplay == Some(false) {
            config.disable_autoplay();
        }
        config
    }
}

/// Overrides read from process environment variables.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    /// `VITRINE_AUTOPLAY`: a falsy value disables every auto-advance timer.
    pub autoplay: Option<bool>,
    /// `VITRINE_SEARCH_DEBOUNCE_MS`
    pub search_debounce_ms: Option<u64>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            autoplay: parse_bool_var("VITRINE_AUTOPLAY"),
            search_debounce_ms: std::env::var("VITRINE_SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|raw| raw.trim().parse().ok()),
        }
    }

    pub fn apply(&self, config: &mut SiteConfig) {
        if self.autoplay == Some(false) {
            config.disable_autoplay();
        }
        if let Some(ms) = self.search_debounce_ms {
            config.search.debounce_ms = ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_projects_table_keeps_projects_preset() {
        let raw = r#"
            [projects]
            auto_advance_ms = 9000
        "#;
        let file: FileConfig = toml::from_str(raw).expect("parse");
        let config = file.into_site_config();

        assert_eq!(config.projects.auto_advance_ms, 9000);
        assert_eq!(config.projects.elements.track, "projects-track");
        assert_eq!(config.projects.item_selector, ".project-card");
        assert_eq!(config.blog, CarouselSettings::blog());
    }

    #[test]
    fn explicit_elements_override_prefix() {
        let raw = r#"
            [blog]
            id_prefix = "posts"

            [blog.elements]
            region = "r"
            track = "t"
            prev = "p"
            next = "n"
            indicators = "i"
        "#;
        let file: FileConfig = toml::from_str(raw).expect("parse");
        let config = file.into_site_config();
        assert_eq!(config.blog.elements.region, "r");
        assert_eq!(config.blog.elements.indicators, "i");
    }

    #[test]
    fn prefix_rewrites_all_ids() {
        let raw = r#"{ "blog": { "id_prefix": "posts" } }"#;
        let file: FileConfig = serde_json::from_str(raw).expect("parse");
        let config = file.into_site_config();
        assert_eq!(config.blog.elements, ElementIds::with_prefix("posts"));
        assert_eq!(config.blog.elements.next, "posts-next");
    }

    #[test]
    fn top_level_autoplay_false_wins_over_presets() {
        let raw = "autoplay = false";
        let file: FileConfig = toml::from_str(raw).expect("parse");
        let config = file.into_site_config();
        assert!(!config.blog.autoplay);
        assert!(!config.projects.autoplay);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let raw = r#"
            [blog]
            autoplai = true
        "#;
        assert!(toml::from_str::<FileConfig>(raw).is_err());
    }

    #[test]
    fn env_overrides_apply_on_top() {
        let mut config = SiteConfig::default();
        let env = EnvConfig {
            autoplay: Some(false),
            search_debounce_ms: Some(150),
        };
        env.apply(&mut config);
        assert!(!config.blog.autoplay);
        assert_eq!(config.search.debounce_ms, 150);
    }
}
