//! Laboratory configuration management.
//!
//! Handles loading of generator parameters and display options from a TOML
//! file with environment variable override support.
//!
//! ```toml
//! seed = 1700000000
//! log_level = "info"
//!
//! [uniform_range]
//! min = 0.0
//! max = 1.0
//!
//! [generators.linear]
//! modulus = 2147483647
//! multiplier = 16807
//! increment = 0
//! ```

use std::path::{Path, PathBuf};

use rnglab_core::{GeneratorKind, LabParameters};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed histogram range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl RangeConfig {
    fn from_pair((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Laboratory configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Fixed seed; the wall clock is used when absent
    pub seed: Option<u64>,

    /// Log level
    pub log_level: String,

    /// Histogram range for uniform generators
    pub uniform_range: RangeConfig,

    /// Histogram range for normal generators
    pub normal_range: RangeConfig,

    /// Generator constructor parameters
    pub generators: LabParameters,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: default_log_level(),
            uniform_range: RangeConfig::from_pair(GeneratorKind::Linear.default_range()),
            normal_range: RangeConfig::from_pair(GeneratorKind::Polar.default_range()),
            generators: LabParameters::default(),
        }
    }
}

impl LabConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// An `RNGLAB_SEED` that is not an unsigned integer is a validation
    /// error rather than a silent fall back to the wall clock.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(
            std::env::var("RNGLAB_SEED").ok(),
            std::env::var("RNGLAB_LOG_LEVEL").ok(),
        )
    }

    fn with_overrides(
        mut self,
        seed: Option<String>,
        log_level: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(seed) = seed {
            let parsed = seed.trim().parse::<u64>().map_err(|e| {
                ConfigError::Validation(vec![format!(
                    "RNGLAB_SEED '{}' is not a valid seed: {}",
                    seed, e
                )])
            })?;
            self.seed = Some(parsed);
        }

        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        // Validate histogram ranges
        for (name, range) in [
            ("uniform_range", &self.uniform_range),
            ("normal_range", &self.normal_range),
        ] {
            if !range.is_valid() {
                errors.push(format!(
                    "{} [{}; {}] must be finite with min < max",
                    name, range.min, range.max
                ));
            }
        }

        // Validate generator moduli
        let g = &self.generators;
        for (name, modulus) in [
            ("generators.linear.modulus", g.linear.modulus),
            ("generators.quadratic.modulus", g.quadratic.modulus),
            ("generators.fibonacci.modulus", g.fibonacci.modulus),
            ("generators.inverse.modulus", g.inverse.modulus),
        ] {
            if modulus == 0 {
                errors.push(format!("{} must be greater than 0", name));
            }
        }

        let ts = &g.three_sigma;
        if !ts.mean.is_finite() {
            errors.push(format!("generators.three_sigma.mean {} must be finite", ts.mean));
        }
        if !ts.std_dev.is_finite() || ts.std_dev < 0.0 {
            errors.push(format!(
                "generators.three_sigma.std_dev {} must be finite and non-negative",
                ts.std_dev
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Histogram range for the given generator
    pub fn histogram_range(&self, kind: GeneratorKind) -> (f64, f64) {
        let range = if kind.is_normal() {
            self.normal_range
        } else {
            self.uniform_range
        };
        (range.min, range.max)
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading {path:?}: {message}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error message
        message: String,
    },
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = LabConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.histogram_range(GeneratorKind::Fibonacci), (0.0, 1.0));
        assert_eq!(config.histogram_range(GeneratorKind::ThreeSigma), (-3.0, 3.0));
        assert_eq!(config.generators, LabParameters::default());
    }

    #[test]
    fn test_default_config_validates() {
        assert!(LabConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LabConfig::from_toml(
            r#"
            seed = 42

            [normal_range]
            min = -4.0
            max = 4.0

            [generators.inverse]
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.histogram_range(GeneratorKind::Polar), (-4.0, 4.0));
        assert_eq!(config.generators.inverse.seed, 7);
        assert_eq!(config.generators.inverse.multiplier, 16_805);
        assert_eq!(config.generators.linear.multiplier, 16_807);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_error() {
        let result = LabConfig::from_toml("seed = \"soon\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let mut config = LabConfig::default();
        config.log_level = "loud".to_string();
        config.uniform_range = RangeConfig { min: 1.0, max: 0.0 };
        config.generators.fibonacci.modulus = 0;
        config.generators.three_sigma.std_dev = -2.0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 4);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("uniform_range")));
                assert!(errors.iter().any(|e| e.contains("fibonacci")));
                assert!(errors.iter().any(|e| e.contains("std_dev")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO", "DEBUG"] {
            let mut config = LabConfig::default();
            config.log_level = level.to_string();
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\n[generators.fibonacci]\nmodulus = 97").unwrap();

        let config = LabConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.generators.fibonacci.modulus, 97);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = LabConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, LabConfig::default());
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("RNGLAB_SEED", "1234");
        let config = LabConfig::default().with_env_override();
        std::env::remove_var("RNGLAB_SEED");
        assert_eq!(config.unwrap().seed, Some(1234));
    }

    #[test]
    fn test_overrides_apply_seed_and_log_level() {
        let config = LabConfig::default()
            .with_overrides(Some(" 42 ".to_string()), Some("debug".to_string()))
            .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unparsable_seed_override_rejected() {
        let err = LabConfig::default()
            .with_overrides(Some("12x4".to_string()), None)
            .unwrap_err();

        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("RNGLAB_SEED '12x4'"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
