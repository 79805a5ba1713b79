// SPDX-License-Identifier: MIT
//
// CLI configuration — an optional TOML file, overridden by flags.
//
//   format = "text"         # or "json"
//   transition = "fade"     # forwarded to the surface when applying a theme
//   preview = true          # draw 24-bit color swatches next to declarations
//
// Every key is optional. A missing file path means defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: OutputFormat,
    pub transition: Option<String>,
    pub preview: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            transition: None,
            preview: true,
        }
    }
}

impl Config {
    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn defaults_preview_text_no_transition() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.transition, None);
        assert!(config.preview);
    }

    #[test]
    fn full_file() {
        let config = Config::parse(
            r#"
            format = "json"
            transition = "fade"
            preview = false
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                format: OutputFormat::Json,
                transition: Some("fade".into()),
                preview: false,
            }
        );
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse(r#"transition = "slide""#).unwrap();
        assert_eq!(config.transition.as_deref(), Some("slide"));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.preview);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(Config::parse("colour = true").is_err());
    }

    #[test]
    fn bad_format_rejected() {
        assert!(Config::parse(r#"format = "yaml""#).is_err());
    }

    #[test]
    fn missing_path_is_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }

    #[test]
    fn unreadable_path_has_context() {
        let err = Config::load(Some(Path::new("/nonexistent/tinter.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"), "{err}");
    }
}
