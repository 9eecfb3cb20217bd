//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.perfreport.toml` files.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".perfreport.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Input loading settings.
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Input file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Field delimiter; must be a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Extension of files read from directory inputs.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            extension: default_extension(),
        }
    }
}

impl LoaderConfig {
    /// The delimiter as the byte the CSV reader splits on.
    pub fn delimiter_byte(&self) -> Result<u8> {
        delimiter_to_byte(self.delimiter).map_err(anyhow::Error::msg)
    }
}

/// Check that `delimiter` can separate CSV fields and convert it to a byte.
///
/// The quote character and line terminators are reserved by the CSV format.
pub fn delimiter_to_byte(delimiter: char) -> std::result::Result<u8, String> {
    match delimiter {
        '"' | '\n' | '\r' => Err(format!(
            "Delimiter {:?} is reserved by the CSV format",
            delimiter
        )),
        c if c.is_ascii() => Ok(c as u8),
        c => Err(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            c
        )),
    }
}

fn default_delimiter() -> char {
    ','
}

fn default_extension() -> String {
    "csv".to_string()
}

/// Report output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub format: crate::cli::OutputFormat,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        self.loader.delimiter_byte()?;
        if self.loader.extension.is_empty() {
            bail!("Input file extension must not be empty");
        }
        Ok(())
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings
    /// when they are explicitly provided.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(delimiter) = args.delimiter {
            self.loader.delimiter = delimiter;
        }

        if let Some(format) = args.format {
            self.output.format = format;
        }

        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.general.verbose);
        assert_eq!(config.loader.delimiter, ',');
        assert_eq!(config.loader.extension, "csv");
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true

[loader]
delimiter = ";"

[output]
format = "json"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.loader.delimiter, ';');
        assert_eq!(config.loader.delimiter_byte().unwrap(), b';');
        assert_eq!(config.loader.extension, "csv");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_validate_rejects_non_ascii_delimiter() {
        let mut config = Config::default();
        config.loader.delimiter = '§';
        assert!(config.validate().is_err());
        assert!(config.loader.delimiter_byte().is_err());
    }

    #[test]
    fn test_validate_rejects_reserved_delimiters() {
        for reserved in ['"', '\n', '\r'] {
            let mut config = Config::default();
            config.loader.delimiter = reserved;
            assert!(config.validate().is_err(), "accepted {:?}", reserved);
        }

        assert_eq!(delimiter_to_byte('|'), Ok(b'|'));
        assert_eq!(delimiter_to_byte('\t'), Ok(b'\t'));
    }

    #[test]
    fn test_load_rejects_quote_delimiter() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("perfreport.toml");
        std::fs::write(&path, "[loader]\ndelimiter = '\"'\n").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("perfreport.toml");
        std::fs::write(&path, "[loader]\ndelimiter = \"\\t\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.loader.delimiter_byte().unwrap(), b'\t');
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[loader]"));
        assert!(toml_str.contains("[output]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.loader.delimiter, ',');
    }
}
