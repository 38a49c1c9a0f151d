//! Engine configuration management
//!
//! Handles loading pricing defaults from TOML files and environment variables.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Largest default path count the engine accepts from configuration.
///
/// Explicit calls to [`price_monte_carlo`](crate::mc::price_monte_carlo) are
/// not bounded by it.
pub const MAX_MC_PATHS: usize = 10_000_000;

/// Environment variable overriding [`PricingConfig::mc_paths`].
pub const ENV_MC_PATHS: &str = "PRICER_MC_PATHS";
/// Environment variable overriding [`PricingConfig::mc_seed`].
pub const ENV_MC_SEED: &str = "PRICER_MC_SEED";
/// Environment variable overriding [`PricingConfig::iv_precision`].
pub const ENV_IV_PRECISION: &str = "PRICER_IV_PRECISION";
/// Environment variable overriding [`PricingConfig::iv_max_iterations`].
pub const ENV_IV_MAX_ITERATIONS: &str = "PRICER_IV_MAX_ITERATIONS";
/// Environment variable overriding [`PricingConfig::ladder_points`].
pub const ENV_LADDER_POINTS: &str = "PRICER_LADDER_POINTS";

/// Configuration error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// The configuration file is not valid TOML for [`PricingConfig`].
    #[error("Failed to parse TOML: {0}")]
    ParseError(String),

    /// An environment variable could not be parsed.
    #[error("Environment variable {name} has invalid value '{value}'")]
    EnvError {
        /// Variable name
        name: &'static str,
        /// Raw value
        value: String,
    },

    /// A field is outside its valid range.
    #[error("Invalid configuration value for {name}: {reason}")]
    InvalidValue {
        /// Field name
        name: &'static str,
        /// Constraint that was violated
        reason: &'static str,
    },
}

/// Engine-level pricing defaults.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::config::PricingConfig;
///
/// let config: PricingConfig = toml::from_str("mc_paths = 20000\nmc_seed = 7").unwrap();
/// assert_eq!(config.mc_paths, 20_000);
/// assert_eq!(config.mc_seed, Some(7));
/// assert_eq!(config.iv_max_iterations, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    /// Monte Carlo draws per pricing call
    pub mc_paths: usize,
    /// Monte Carlo seed; `None` draws one from entropy per call
    pub mc_seed: Option<u64>,
    /// Implied-volatility price tolerance
    pub iv_precision: f64,
    /// Implied-volatility iteration cap
    pub iv_max_iterations: usize,
    /// Spot ladder resolution
    pub ladder_points: usize,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            mc_paths: 100_000,
            mc_seed: None,
            iv_precision: 1e-5,
            iv_max_iterations: 100,
            ladder_points: 100,
        }
    }
}

impl PricingConfig {
    /// Create a new PricingConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Load configuration from a TOML file; missing fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: PricingConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Build configuration from all sources
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file
    /// 3. Default values
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides()
    }

    /// Apply the `PRICER_*` environment variables that are set
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MC_PATHS) {
            self.mc_paths = parse_var(ENV_MC_PATHS, &raw)?;
        }

        if let Some(raw) = lookup(ENV_MC_SEED) {
            self.mc_seed = match raw.trim().to_lowercase().as_str() {
                "" | "none" => None,
                _ => Some(parse_var(ENV_MC_SEED, &raw)?),
            };
        }

        if let Some(raw) = lookup(ENV_IV_PRECISION) {
            self.iv_precision = parse_var(ENV_IV_PRECISION, &raw)?;
        }

        if let Some(raw) = lookup(ENV_IV_MAX_ITERATIONS) {
            self.iv_max_iterations = parse_var(ENV_IV_MAX_ITERATIONS, &raw)?;
        }

        if let Some(raw) = lookup(ENV_LADDER_POINTS) {
            self.ladder_points = parse_var(ENV_LADDER_POINTS, &raw)?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mc_paths == 0 || self.mc_paths > MAX_MC_PATHS {
            return Err(ConfigError::InvalidValue {
                name: "mc_paths",
                reason: "must be in range [1, 10_000_000]",
            });
        }

        if !(self.iv_precision > 0.0 && self.iv_precision.is_finite()) {
            return Err(ConfigError::InvalidValue {
                name: "iv_precision",
                reason: "must be positive and finite",
            });
        }

        if self.iv_max_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                name: "iv_max_iterations",
                reason: "must be at least 1",
            });
        }

        if self.ladder_points < 2 {
            return Err(ConfigError::InvalidValue {
                name: "ladder_points",
                reason: "must be at least 2",
            });
        }

        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::EnvError {
        name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    // ==========================================================
    // Defaults and validation
    // ==========================================================

    #[test]
    fn test_default_config() {
        let config = PricingConfig::default();
        assert_eq!(config.mc_paths, 100_000);
        assert_eq!(config.mc_seed, None);
        assert_eq!(config.iv_precision, 1e-5);
        assert_eq!(config.iv_max_iterations, 100);
        assert_eq!(config.ladder_points, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_each_field() {
        let cases = [
            (PricingConfig { mc_paths: 0, ..Default::default() }, "mc_paths"),
            (PricingConfig { mc_paths: MAX_MC_PATHS + 1, ..Default::default() }, "mc_paths"),
            (PricingConfig { iv_precision: 0.0, ..Default::default() }, "iv_precision"),
            (PricingConfig { iv_precision: f64::NAN, ..Default::default() }, "iv_precision"),
            (PricingConfig { iv_max_iterations: 0, ..Default::default() }, "iv_max_iterations"),
            (PricingConfig { ladder_points: 1, ..Default::default() }, "ladder_points"),
        ];

        for (config, field) in cases {
            match config.validate() {
                Err(ConfigError::InvalidValue { name, .. }) => assert_eq!(name, field),
                other => panic!("expected InvalidValue for {}, got {:?}", field, other),
            }
        }
    }

    // ==========================================================
    // TOML
    // ==========================================================

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            mc_paths = 50000
            mc_seed = 42
            iv_precision = 1e-8
            iv_max_iterations = 50
            ladder_points = 25
        "#;

        let config: PricingConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.mc_paths, 50_000);
        assert_eq!(config.mc_seed, Some(42));
        assert_eq!(config.iv_precision, 1e-8);
        assert_eq!(config.iv_max_iterations, 50);
        assert_eq!(config.ladder_points, 25);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: PricingConfig = toml::from_str("ladder_points = 10").unwrap();
        assert_eq!(config.ladder_points, 10);
        assert_eq!(config.mc_paths, 100_000);
    }

    #[test]
    fn test_unknown_toml_field_rejected() {
        assert!(toml::from_str::<PricingConfig>("mc_pathz = 10").is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("pricing-config-{}.toml", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "mc_paths = 1234").unwrap();
        }

        let config = PricingConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.mc_paths, 1234);
    }

    #[test]
    fn test_from_file_missing() {
        let err = PricingConfig::from_file("/nonexistent/pricing.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_from_file_invalid_value() {
        let path = std::env::temp_dir().join(format!("pricing-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "ladder_points = 1\n").unwrap();

        let err = PricingConfig::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::InvalidValue { name: "ladder_points", .. }));
    }

    // ==========================================================
    // Environment overrides
    // ==========================================================

    #[test]
    fn test_overrides_applied() {
        let config = PricingConfig::default()
            .with_overrides(lookup(&[
                (ENV_MC_PATHS, "2000"),
                (ENV_MC_SEED, "99"),
                (ENV_IV_PRECISION, "1e-7"),
                (ENV_IV_MAX_ITERATIONS, "30"),
                (ENV_LADDER_POINTS, " 11 "),
            ]))
            .unwrap();

        assert_eq!(config.mc_paths, 2000);
        assert_eq!(config.mc_seed, Some(99));
        assert_eq!(config.iv_precision, 1e-7);
        assert_eq!(config.iv_max_iterations, 30);
        assert_eq!(config.ladder_points, 11);
    }

    #[test]
    fn test_seed_override_can_clear() {
        let start = PricingConfig {
            mc_seed: Some(1),
            ..Default::default()
        };
        let config = start.with_overrides(lookup(&[(ENV_MC_SEED, "none")])).unwrap();
        assert_eq!(config.mc_seed, None);
    }

    #[test]
    fn test_unset_variables_keep_values() {
        let config = PricingConfig::default().with_overrides(lookup(&[])).unwrap();
        assert_eq!(config, PricingConfig::default());
    }

    #[test]
    fn test_unparsable_variable() {
        let err = PricingConfig::default()
            .with_overrides(lookup(&[(ENV_MC_PATHS, "lots")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::EnvError {
                name: ENV_MC_PATHS,
                value: "lots".to_string()
            }
        );
        assert!(err.to_string().contains("PRICER_MC_PATHS"));
    }

    #[test]
    fn test_override_validated() {
        let err = PricingConfig::default()
            .with_overrides(lookup(&[(ENV_IV_MAX_ITERATIONS, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "iv_max_iterations", .. }));
    }
}
