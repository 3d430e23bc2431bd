use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::render::DEFAULT_CHART_HOST;
use crate::tabs::TabId;

/// Account searched on startup when nothing else is configured
pub const DEFAULT_INITIAL_USER: &str = "aniketgupta149";

/// Main configuration structure
///
/// Loaded from `config.toml` in the user config dir; command line flags
/// override individual values afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load config from the default location, or defaults if there is no file
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        toml::from_str(contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Write the default config to `path` unless a file is already there.
    /// Returns whether anything was written.
    pub fn init_at(path: &Path) -> crate::Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// `<config dir>/ghdash/config.toml`
    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?;

        Ok(config_dir.join("ghdash").join("config.toml"))
    }

    /// Login to search on startup, `None` when disabled with an empty value
    pub fn initial_user(&self) -> Option<&str> {
        self.ui
            .initial_user
            .as_deref()
            .map(str::trim)
            .filter(|user| !user.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitHubConfig {
    /// API URL (for GitHub Enterprise)
    #[serde(default = "default_github_url")]
    pub api_url: String,
}

fn default_github_url() -> String {
    ghdash_api::GITHUB_API_BASE.to_string()
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_github_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    /// Service that renders contribution graphs as images
    #[serde(default = "default_chart_host")]
    pub host: String,
}

fn default_chart_host() -> String {
    DEFAULT_CHART_HOST.to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            host: default_chart_host(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Theme name (Default Dark, Light, Nord, Dracula, Gruvbox Dark)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Searched on startup. Set to "" to start with an empty dashboard.
    #[serde(default = "default_initial_user")]
    pub initial_user: Option<String>,

    #[serde(default = "default_initial_tab")]
    pub initial_tab: TabId,
}

fn default_theme() -> String {
    "Default Dark".to_string()
}

fn default_initial_user() -> Option<String> {
    Some(DEFAULT_INITIAL_USER.to_string())
}

fn default_initial_tab() -> TabId {
    TabId::Overview
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            initial_user: default_initial_user(),
            initial_tab: default_initial_tab(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.chart.host, "https://ghchart.rshah.org");
        assert_eq!(config.ui.theme, "Default Dark");
        assert_eq!(config.initial_user(), Some(DEFAULT_INITIAL_USER));
        assert_eq!(config.ui.initial_tab, TabId::Overview);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("api_url"));
        assert!(toml.contains("initial_tab = \"overview\""));

        assert_eq!(Config::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::from_toml(
            r#"
            [ui]
            theme = "Nord"
            initial_user = ""
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.theme, "Nord");
        assert_eq!(config.initial_user(), None);
        assert_eq!(config.ui.initial_tab, TabId::Overview);
        assert_eq!(config.chart.host, DEFAULT_CHART_HOST);
    }

    #[test]
    fn test_bad_file_is_a_config_error() {
        let err = Config::from_toml("[ui]\ninitial_tab = \"settings\"").unwrap_err();
        assert!(matches!(err, crate::Error::ConfigError(_)));
    }

    #[test]
    fn test_init_writes_defaults_once() {
        let dir = std::env::temp_dir().join(format!("ghdash-init-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = std::fs::remove_dir_all(&dir);

        assert!(Config::init_at(&path).unwrap());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        // An existing file is left alone
        std::fs::write(&path, "[ui]\ntheme = \"Nord\"\n").unwrap();
        assert!(!Config::init_at(&path).unwrap());
        assert_eq!(Config::load_from(&path).unwrap().ui.theme, "Nord");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("ghdash-does-not-exist").join("config.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
