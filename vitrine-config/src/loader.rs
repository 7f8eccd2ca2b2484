use anyhow::Context;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::{
    models::{
        SiteConfig,
        sources::{EnvConfig, FileConfig},
    },
    util::non_empty_var,
    validation::validate,
};

pub const CONFIG_PATH_VAR: &str = "VITRINE_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "VITRINE_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "vitrine.toml",
    "vitrine.json",
    "config/vitrine.toml",
    "config/vitrine.json",
];

/// Source that produced the site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Result of a load: the validated configuration and where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: SiteConfig,
    pub source: ConfigSource,
}

/// Composes file, inline and environment configuration.
///
/// Evaluation order:
/// 1) `$VITRINE_CONFIG_PATH` (TOML or JSON file),
/// 2) `$VITRINE_CONFIG_JSON` (inline JSON),
/// 3) the first existing default file below `root`,
/// 4) built-in presets.
///
/// Environment overrides (`VITRINE_AUTOPLAY`, `VITRINE_SEARCH_DEBOUNCE_MS`)
/// are applied last, then guard rails run.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    root: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search default file candidates relative to `root` instead of the
    /// working directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn load(&self) -> anyhow::Result<ConfigLoad> {
        let (file, source) = self.resolve_file_config()?;
        let mut config = file.into_site_config();
        EnvConfig::gather().apply(&mut config);

        validate(&config).context("site configuration rejected")?;

        match &source {
            ConfigSource::Default => {
                debug!("using built-in site configuration")
            }
            ConfigSource::EnvInline => {
                info!("loaded site configuration from {CONFIG_JSON_VAR}")
            }
            ConfigSource::EnvPath(path) | ConfigSource::File(path) => {
                info!("loaded site configuration from {}", path.display())
            }
        }

        Ok(ConfigLoad { config, source })
    }

    fn resolve_file_config(
        &self,
    ) -> anyhow::Result<(FileConfig, ConfigSource)> {
        if let Some(path_str) = non_empty_var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path_str);
            let file = read_file_config(&path)?;
            return Ok((file, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty_var(CONFIG_JSON_VAR) {
            let file = ConfigFormat::Json
                .parse(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((file, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let file = read_file_config(&path)?;
            return Ok((file, ConfigSource::File(path)));
        }

        Ok((FileConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| self.root.join(candidate))
            .find(|path| path.exists())
    }
}

/// File formats a site configuration can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn parse(self, contents: &str) -> anyhow::Result<FileConfig> {
        Ok(match self {
            Self::Toml => toml::from_str(contents)?,
            Self::Json => serde_json::from_str(contents)?,
        })
    }
}

fn read_file_config(path: &Path) -> anyhow::Result<FileConfig> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read site config from {}", path.display())
    })?;

    let parsed = match ConfigFormat::of(path) {
        Some(format) => format.parse(&contents),
        // Unknown extension: TOML, then JSON.
        None => ConfigFormat::Toml
            .parse(&contents)
            .or_else(|_| ConfigFormat::Json.parse(&contents)),
    };
    parsed.with_context(|| format!("invalid site config {}", path.display()))
}
