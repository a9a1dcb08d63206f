//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{BillingConfig, BillingRules, EngineConfig, ShiftRules, ShiftRulesConfig};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and exposes the validated shift and billing rules.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/yard/
/// ├── shift_rules.yaml  # Regular cutoff, daily cap, overtime multiplier
/// └── billing.yaml      # Crew-hour unit price
/// ```
///
/// # Example
///
/// ```no_run
/// use labor_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/yard").unwrap();
/// println!("Overtime starts after {}", loader.shift_rules().regular_cutoff());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/yard")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rule value fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use labor_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/yard")?;
    /// # Ok::<(), labor_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let shift_rules_path = path.join("shift_rules.yaml");
        let shift_rules_config = Self::load_yaml::<ShiftRulesConfig>(&shift_rules_path)?;

        let billing_path = path.join("billing.yaml");
        let billing_config = Self::load_yaml::<BillingConfig>(&billing_path)?;

        let shift_rules = ShiftRules::from_config(&shift_rules_config)?;
        let billing = BillingRules::from_config(&billing_config)?;

        Ok(Self {
            config: EngineConfig::new(shift_rules, billing),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the shift rules.
    pub fn shift_rules(&self) -> &ShiftRules {
        self.config.shift_rules()
    }

    /// Returns the billing rules.
    pub fn billing(&self) -> &BillingRules {
        self.config.billing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/yard"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_shift_rules_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let rules = loader.shift_rules();
        assert_eq!(
            rules.regular_cutoff(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap()
        );
        assert_eq!(rules.daily_regular_cap(), dec("8"));
        assert_eq!(rules.default_overtime_multiplier(), dec("1.25"));
    }

    #[test]
    fn test_billing_rules_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.billing().unit_price_per_hour(), dec("3000"));
    }

    #[test]
    fn test_loaded_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.config(), &EngineConfig::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("shift_rules.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
