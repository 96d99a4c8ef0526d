//! Configuration file for the CLI.
//!
//! ```toml
//! log_level = "info"
//! format = "json"
//!
//! [defaults]
//! feet = 5
//! inches = 7
//! pounds = 165.0
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bmi_core::ImperialMeasurement;
use serde::{Deserialize, Serialize};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Serialized report
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub format: OutputFormat,

    /// Values offered at the prompts
    #[serde(default)]
    pub defaults: PromptDefaults,
}

/// Values offered at the prompts when the user just presses enter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDefaults {
    pub feet: u32,
    pub inches: u32,
    pub pounds: f64,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        let reference = ImperialMeasurement::default();
        PromptDefaults {
            feet: reference.feet,
            inches: reference.inches,
            pounds: reference.pounds,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: default_log_level(),
            format: OutputFormat::default(),
            defaults: PromptDefaults::default(),
        }
    }
}

impl Config {
    /// Load from a TOML file, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse TOML contents.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.defaults.feet, 5);
        assert_eq!(config.defaults.inches, 7);
        assert_eq!(config.defaults.pounds, 165.0);
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_toml(
            r#"
            log_level = "debug"
            format = "json"

            [defaults]
            feet = 6
            inches = 1
            pounds = 180.5
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.defaults, PromptDefaults { feet: 6, inches: 1, pounds: 180.5 });
    }

    #[test]
    fn test_partial_defaults_table() {
        let config = Config::from_toml("[defaults]\nfeet = 6\n").unwrap();
        assert_eq!(config.defaults.feet, 6);
        assert_eq!(config.defaults.inches, 7);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_bad_format_is_rejected() {
        assert!(Config::from_toml(r#"format = "yaml""#).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/bmi.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }
}
