//! Configuration management for Persona
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (PERSONA_*)
//! 3. Config file (~/.config/persona/config.toml)
//! 4. Default values

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Error, Result};

/// How the CLI prints results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("Unknown output format: {}", other))),
        }
    }
}

/// Workout logging configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Weight pre-filled into sets generated from a plan
    pub default_weight: f64,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Workout logging configuration
    pub log: LogConfig,

    /// Output configuration
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/persona/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("persona").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - PERSONA_DEFAULT_WEIGHT: Weight pre-filled into generated sets
    /// - PERSONA_OUTPUT_FORMAT: "text" or "json"
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(weight) = var("PERSONA_DEFAULT_WEIGHT") {
            match weight.trim().parse::<f64>() {
                Ok(w) => self.log.default_weight = w,
                Err(e) => warn!(value = %weight, error = %e, "Ignoring PERSONA_DEFAULT_WEIGHT"),
            }
        }

        if let Some(format) = var("PERSONA_OUTPUT_FORMAT") {
            match format.parse::<OutputFormat>() {
                Ok(f) => self.output.format = f,
                Err(e) => warn!(value = %format, error = %e, "Ignoring PERSONA_OUTPUT_FORMAT"),
            }
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        default_weight: Option<f64>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(weight) = default_weight {
            self.log.default_weight = weight;
        }

        if let Some(f) = format {
            self.output.format = f;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        default_weight: Option<f64>,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(default_weight, format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log.default_weight, 0.0);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(Some(20.0), Some(OutputFormat::Json));

        assert_eq!(config.log.default_weight, 20.0);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().with_overrides_from(|key| match key {
            "PERSONA_DEFAULT_WEIGHT" => Some("12.5".to_string()),
            "PERSONA_OUTPUT_FORMAT" => Some("JSON".to_string()),
            _ => None,
        });

        assert_eq!(config.log.default_weight, 12.5);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_env_overrides_ignored() {
        let config = Config::default().with_overrides_from(|key| match key {
            "PERSONA_DEFAULT_WEIGHT" => Some("heavy".to_string()),
            "PERSONA_OUTPUT_FORMAT" => Some("yaml".to_string()),
            _ => None,
        });

        assert_eq!(config.log.default_weight, 0.0);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[log]
default_weight = 40.0

[output]
format = "json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.log.default_weight, 40.0);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[output]
format = "json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // default_weight should use default
        assert_eq!(config.log.default_weight, 0.0);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[log]\ndefault_weight = 15.0").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.log.default_weight, 15.0);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[log\ndefault_weight = ").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(" Json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
