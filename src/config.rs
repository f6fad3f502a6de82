//! Command-line tool configuration.
//!
//! Configuration is loaded in the following order (later overrides earlier):
//! 1. Default values
//! 2. YAML config file (if specified via IRCREPLY_CONFIG or --config)
//! 3. Environment variables
//! 4. Command-line flags

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const HEADER: &str = "# ircreply configuration; environment variables and flags override it.\n";

/// Tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,
    /// Decoding configuration.
    pub decode: DecodeConfig,
}

impl Config {
    /// Loads configuration from `path` if given, then applies environment
    /// variable overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Reads a YAML config file. Keys that are missing keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_yaml(&text)
                .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string())),
            Err(e) => Err(ConfigError::IoError(path.to_path_buf(), e)),
        }
    }

    /// Parses configuration from YAML text. An empty document is the default
    /// configuration.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Writes the configuration as YAML, creating the parent directory if
    /// needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let body =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        let io_err = |e| ConfigError::IoError(path.to_path_buf(), e);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }
        std::fs::write(path, format!("{}{}", HEADER, body)).map_err(io_err)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.output.apply_overrides(&lookup)?;
        self.decode.apply_overrides(&lookup);
        Ok(())
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// How decoded replies are printed.
    pub format: OutputFormat,
    /// Colorize text output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    fn apply_overrides<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("IRCREPLY_FORMAT") {
            self.format = OutputFormat::from_str(&format, true).map_err(|_| {
                ConfigError::ValidationError(format!(
                    "IRCREPLY_FORMAT must be json, pretty, or text (got '{}')",
                    format
                ))
            })?;
        }

        if let Some(color) = lookup("IRCREPLY_COLOR") {
            self.color = parse_flag(&color);
        }

        Ok(())
    }
}

/// Decoding configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Stop at the first reply that fails to decode.
    pub fail_fast: bool,
    /// Re-encode every decoded reply and check it matches the input.
    pub verify: bool,
}

impl DecodeConfig {
    fn apply_overrides<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(fail_fast) = lookup("IRCREPLY_FAIL_FAST") {
            self.fail_fast = parse_flag(&fail_fast);
        }

        if let Some(verify) = lookup("IRCREPLY_VERIFY") {
            self.verify = parse_flag(&verify);
        }
    }
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON document per line.
    Json,
    /// Indented JSON.
    Pretty,
    /// Human-readable text.
    Text,
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    IoError(PathBuf, std::io::Error),
    ParseError(PathBuf, String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(path, e) => {
                write!(f, "failed to access config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::SerializeError(e) => write!(f, "failed to serialize config: {}", e),
            ConfigError::ValidationError(msg) => {
                write!(f, "configuration validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
        assert!(!config.decode.fail_fast);
        assert!(!config.decode.verify);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Pretty;
        config.decode.verify = true;

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let parsed = Config::from_yaml("output:\n  format: json\n").unwrap();
        assert_eq!(parsed.output.format, OutputFormat::Json);
        assert!(parsed.output.color);
        assert_eq!(parsed.decode, DecodeConfig::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("ircreply.yaml");

        let mut config = Config::default();
        config.decode.fail_fast = true;
        config.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# ircreply configuration"));
        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_, _)));
    }

    #[test]
    fn test_bad_yaml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"output: [not, a, map]\n").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_, _)));
        assert!(err.to_string().starts_with("failed to parse config file"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(lookup(&[
                ("IRCREPLY_FORMAT", "JSON"),
                ("IRCREPLY_COLOR", "0"),
                ("IRCREPLY_FAIL_FAST", "true"),
                ("IRCREPLY_VERIFY", "1"),
            ]))
            .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert!(config.decode.fail_fast);
        assert!(config.decode.verify);
    }

    #[test]
    fn test_invalid_format_override() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(lookup(&[("IRCREPLY_FORMAT", "xml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
