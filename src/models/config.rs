use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from the YAML file named by `CONFIG_FILE`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Default target contrast ratio (1..=21)
    #[serde(default = "default_target_ratio")]
    pub target_ratio: f64,

    /// Default number of palette colors
    #[serde(default = "default_colors")]
    pub colors: usize,

    /// Color naming lookup
    #[serde(default)]
    pub naming: NamingConfig,
}

fn default_target_ratio() -> f64 {
    4.5 // WCAG AA for normal text
}

fn default_colors() -> usize {
    contrast_palette::DEFAULT_COLOR_COUNT
}

/// Configuration for the external color naming service
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NamingConfig {
    /// Whether lookups are made at all
    #[serde(default = "default_naming_enabled")]
    pub enabled: bool,

    /// Base URL; hex values are passed as `?values=RRGGBB,RRGGBB`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_naming_enabled() -> bool {
    true
}

fn default_base_url() -> String {
    "https://api.color.pizza/v1/".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            enabled: default_naming_enabled(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_ratio: default_target_ratio(),
            colors: default_colors(),
            naming: NamingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Path from the `CONFIG_FILE` environment variable, if set
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
    }

    /// Load configuration from `CONFIG_FILE`, or defaults when unset
    pub fn from_env() -> Self {
        Self::load(Self::path_from_env().as_deref())
    }

    /// Load configuration from a YAML file.
    ///
    /// Read and parse failures are logged and fall back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        target_ratio = config.target_ratio,
                        colors = config.colors,
                        naming = config.naming.enabled,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from a YAML string
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
