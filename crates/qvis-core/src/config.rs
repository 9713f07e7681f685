//! Display and logging settings.
//!
//! Settings are passed explicitly to every call site that needs them. They
//! are loaded from:
//! 1. A YAML configuration file (explicit path, or `~/.qvis/config.yaml`)
//! 2. Environment variables with the `QVIS_` prefix
//! 3. A `.env` file in the working directory or its parents
//!
//! Precedence (highest to lowest): process environment, `.env`, file, defaults.
//! The `.env` file is read into a lookup table; the process environment is
//! never modified.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::search::DEFAULT_ENUMERATION_LIMIT;

/// Complete settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// How many entries renderers show.
    #[serde(default)]
    pub display: DisplayLimits,

    /// Most basis states enumerated per outcome.
    #[serde(default = "default_enumeration_limit")]
    pub enumeration_limit: usize,

    /// Resource estimate options.
    #[serde(default)]
    pub resources: ResourceOptions,

    /// Logging options.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Entry counts shown by renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLimits {
    /// Bars shown for a search outcome.
    #[serde(default = "default_search_states")]
    pub search_states: usize,

    /// Phasors shown for a Fourier outcome.
    #[serde(default = "default_fourier_states")]
    pub fourier_states: usize,
}

/// Resource estimate options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOptions {
    /// Apply the optimized-timing discount to compute time.
    #[serde(default = "default_true")]
    pub optimized_timing: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_search_states() -> usize {
    10
}

fn default_fourier_states() -> usize {
    8
}

fn default_enumeration_limit() -> usize {
    DEFAULT_ENUMERATION_LIMIT
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

impl Default for DisplayLimits {
    fn default() -> Self {
        DisplayLimits {
            search_states: default_search_states(),
            fourier_states: default_fourier_states(),
        }
    }
}

impl Default for ResourceOptions {
    fn default() -> Self {
        ResourceOptions {
            optimized_timing: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            display: DisplayLimits::default(),
            enumeration_limit: default_enumeration_limit(),
            resources: ResourceOptions::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate settings from YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            serde_yaml_ng::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Default config file location, `~/.qvis/config.yaml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".qvis").join("config.yaml"))
    }

    /// Load settings with the following precedence:
    /// 1. `config_file` if given, else the default path if it exists, else defaults
    /// 2. Environment variable overrides, falling back to a `.env` file
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let dotenv = env_file_vars(None);
        Self::load_with(config_file, |key| {
            std::env::var(key).ok().or_else(|| dotenv.get(key).cloned())
        })
    }

    /// [`Settings::load`] with an explicit variable lookup.
    pub fn load_with<F>(config_file: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => {
                    debug!(path = %path.display(), "loading default config file");
                    Self::from_file(path)?
                }
                None => Settings::default(),
            },
        };

        let settings = settings.merge_env(lookup);
        settings.validate()?;
        Ok(settings)
    }

    /// Apply overrides from a variable lookup.
    ///
    /// Only variables that are present override the current values;
    /// numeric or boolean values that fail to parse are ignored.
    pub fn merge_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("QVIS_SEARCH_DISPLAY").and_then(|v| v.parse().ok()) {
            self.display.search_states = val;
        }
        if let Some(val) = lookup("QVIS_FOURIER_DISPLAY").and_then(|v| v.parse().ok()) {
            self.display.fourier_states = val;
        }
        if let Some(val) = lookup("QVIS_ENUMERATION_LIMIT").and_then(|v| v.parse().ok()) {
            self.enumeration_limit = val;
        }
        if let Some(val) = lookup("QVIS_OPTIMIZED_TIMING").and_then(|v| v.parse().ok()) {
            self.resources.optimized_timing = val;
        }
        if let Some(v) = lookup("QVIS_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("QVIS_LOG_FORMAT") {
            self.logging.format = v;
        }
        self
    }

    /// Validate settings values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.search_states == 0 {
            return Err(ConfigError::Validation(
                "display.search_states must be greater than 0".to_string(),
            ));
        }
        if self.display.fourier_states == 0 {
            return Err(ConfigError::Validation(
                "display.fourier_states must be greater than 0".to_string(),
            ));
        }
        if self.enumeration_limit == 0 {
            return Err(ConfigError::Validation(
                "enumeration_limit must be greater than 0".to_string(),
            ));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        Ok(())
    }
}

/// Variables from a `.env` file: `path`, or the first `.env` found from the
/// working directory upwards. A missing or malformed file yields no variables.
pub fn env_file_vars(path: Option<&Path>) -> HashMap<String, String> {
    let iter = match path {
        Some(path) => dotenvy::from_path_iter(path),
        None => dotenvy::dotenv_iter(),
    };
    match iter {
        Ok(iter) => iter.flatten().collect(),
        Err(e) => {
            debug!(error = %e, "no .env file loaded");
            HashMap::new()
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("I/O error: {0}")]
    Io(String),

    /// Failed to parse the config file.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.display.search_states, 10);
        assert_eq!(settings.display.fourier_states, 8);
        assert_eq!(settings.enumeration_limit, 1 << 20);
        assert!(settings.resources.optimized_timing);
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let settings = Settings::from_yaml("display:\n  search_states: 4\n").unwrap();
        assert_eq!(settings.display.search_states, 4);
        assert_eq!(settings.display.fourier_states, 8);
        assert_eq!(settings.logging.format, "console");
    }

    #[test]
    fn full_yaml() {
        let yaml = r"
display:
  search_states: 16
  fourier_states: 4
enumeration_limit: 4096
resources:
  optimized_timing: false
logging:
  level: debug
  format: json
";
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.enumeration_limit, 4096);
        assert!(!settings.resources.optimized_timing);
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = Settings::from_yaml("display: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_values_rejected() {
        let err = Settings::from_yaml("enumeration_limit: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = Settings::from_yaml("logging:\n  level: loud\n").unwrap_err();
        assert_eq!(
            err,
            ConfigError::Validation("Invalid log level: loud".to_string())
        );
    }

    #[test]
    fn env_overrides_file_values() {
        let settings = Settings::from_yaml("display:\n  search_states: 4\n")
            .unwrap()
            .merge_env(env(&[
                ("QVIS_SEARCH_DISPLAY", "12"),
                ("QVIS_OPTIMIZED_TIMING", "false"),
                ("QVIS_LOG_LEVEL", "debug"),
            ]));
        assert_eq!(settings.display.search_states, 12);
        assert!(!settings.resources.optimized_timing);
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn unparseable_env_values_ignored() {
        let settings = Settings::default().merge_env(env(&[
            ("QVIS_ENUMERATION_LIMIT", "lots"),
            ("QVIS_FOURIER_DISPLAY", "-3"),
        ]));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn env_file_supplies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");
        std::fs::write(
            &env_path,
            "# display overrides\nQVIS_FOURIER_DISPLAY=5\nQVIS_LOG_FORMAT=json\n",
        )
        .unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "display:\n  fourier_states: 3\n").unwrap();

        let dotenv = env_file_vars(Some(env_path.as_path()));
        assert_eq!(dotenv.get("QVIS_FOURIER_DISPLAY").map(String::as_str), Some("5"));

        // process environment first, then the .env file
        let process = env(&[("QVIS_LOG_FORMAT", "console")]);
        let settings = Settings::load_with(Some(config_path.as_path()), |key| {
            process(key).or_else(|| dotenv.get(key).cloned())
        })
        .unwrap();
        assert_eq!(settings.display.fourier_states, 5);
        assert_eq!(settings.logging.format, "console");
    }

    #[test]
    fn missing_env_file_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(env_file_vars(Some(dir.path().join(".env").as_path())).is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::from_file("/nonexistent/qvis/config.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
