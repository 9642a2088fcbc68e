//! Site configuration.
//!
//! Settings come from `site.toml`, embedded at compile time. Every field has a
//! default, so a partial (or empty) file is valid.

use serde::Deserialize;
use tracing::Level;

use crate::disclosure::DisclosureMode;
use crate::error::ConfigError;

/// Contents of the bundled `site.toml`.
pub const SITE_TOML: &str = include_str!("../site.toml");

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSettings,
    pub logging: LoggingConfig,
    pub disclosure: DisclosureConfig,
}

/// Branding and outbound links
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub brand: String,
    /// Target of the "APP" button in the navigation bar.
    pub app_url: String,
    /// Target of the "Join Community" call to action.
    pub community_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            brand: "Phala".into(),
            app_url: "#".into(),
            community_url: "#".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level; anything unrecognised falls back to `INFO`.
    pub fn level(&self) -> Level {
        self.level.trim().parse().unwrap_or(Level::INFO)
    }
}

/// Behavior of each disclosure list on the page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisclosureConfig {
    pub features: DisclosureMode,
    pub use_cases: DisclosureMode,
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse the bundled `site.toml`.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(SITE_TOML)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("").expect("empty toml");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.brand, "Phala");
        assert_eq!(config.logging.level(), Level::INFO);
        assert_eq!(config.disclosure.features, DisclosureMode::Independent);
    }

    #[test]
    fn bundled_config_parses() {
        let config = SiteConfig::embedded().expect("site.toml");
        assert_eq!(config.site.brand, "Phala");
        assert_eq!(config.disclosure.use_cases, DisclosureMode::Independent);
    }

    #[test]
    fn parses_exclusive_mode_and_level() {
        let config = SiteConfig::from_toml_str(
            r#"
[logging]
level = "debug"

[disclosure]
use_cases = "exclusive"
"#,
        )
        .expect("valid toml");

        assert_eq!(config.logging.level(), Level::DEBUG);
        assert_eq!(config.disclosure.features, DisclosureMode::Independent);
        assert_eq!(config.disclosure.use_cases, DisclosureMode::Exclusive);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let logging = LoggingConfig {
            level: "chatty".into(),
        };
        assert_eq!(logging.level(), Level::INFO);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = SiteConfig::from_toml_str("[site\nbrand = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_mode_is_an_error() {
        assert!(SiteConfig::from_toml_str("[disclosure]\nfeatures = \"sometimes\"").is_err());
    }
}
