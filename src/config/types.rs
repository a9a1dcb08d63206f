//! Configuration types for the labor engine.
//!
//! This module contains the raw file structures deserialized from YAML and
//! the validated configuration the rest of the engine consumes.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::parse_time_of_day;

/// Default time of day after which worked hours count as overtime.
pub const DEFAULT_REGULAR_CUTOFF: NaiveTime = match NaiveTime::from_hms_opt(17, 0, 0) {
    Some(time) => time,
    None => panic!("17:00:00 is a valid wall-clock time"),
};

/// Default daily cap on regular hours.
pub const DEFAULT_DAILY_REGULAR_CAP: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Default wage multiplier applied to overtime hours.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Default billing rate in yen per crew-hour.
pub const DEFAULT_UNIT_PRICE: Decimal = Decimal::from_parts(3000, 0, 0, false, 0);

/// Shift rules file structure (shift_rules.yaml).
///
/// The cutoff is kept as a string here so the file can use the plain
/// `HH:MM` form; validation turns it into a [`NaiveTime`].
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftRulesConfig {
    /// Wall-clock time after which worked hours count as overtime.
    pub regular_cutoff: String,
    /// Daily cap on regular hours.
    pub daily_regular_cap: Decimal,
    /// Wage multiplier applied to overtime hours.
    pub default_overtime_multiplier: Decimal,
}

/// Billing file structure (billing.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Billing rate in yen per crew-hour.
    pub unit_price_per_hour: Decimal,
}

/// Validated rules for splitting a day's work into regular and overtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRules {
    regular_cutoff: NaiveTime,
    daily_regular_cap: Decimal,
    default_overtime_multiplier: Decimal,
}

impl ShiftRules {
    /// Creates validated shift rules.
    ///
    /// The cap and the multiplier must both be positive.
    pub fn new(
        regular_cutoff: NaiveTime,
        daily_regular_cap: Decimal,
        default_overtime_multiplier: Decimal,
    ) -> EngineResult<Self> {
        if daily_regular_cap <= Decimal::ZERO {
            return Err(EngineError::InvalidConfiguration {
                message: format!(
                    "daily_regular_cap must be positive, got {}",
                    daily_regular_cap
                ),
            });
        }
        if default_overtime_multiplier <= Decimal::ZERO {
            return Err(EngineError::InvalidConfiguration {
                message: format!(
                    "default_overtime_multiplier must be positive, got {}",
                    default_overtime_multiplier
                ),
            });
        }
        Ok(Self {
            regular_cutoff,
            daily_regular_cap,
            default_overtime_multiplier,
        })
    }

    /// Builds validated rules from the raw file structure.
    pub fn from_config(config: &ShiftRulesConfig) -> EngineResult<Self> {
        let regular_cutoff = parse_time_of_day(&config.regular_cutoff).ok_or_else(|| {
            EngineError::InvalidConfiguration {
                message: format!(
                    "regular_cutoff '{}' is not a valid HH:MM time",
                    config.regular_cutoff
                ),
            }
        })?;
        Self::new(
            regular_cutoff,
            config.daily_regular_cap,
            config.default_overtime_multiplier,
        )
    }

    /// Wall-clock time after which worked hours count as overtime.
    pub fn regular_cutoff(&self) -> NaiveTime {
        self.regular_cutoff
    }

    /// Daily cap on regular hours.
    pub fn daily_regular_cap(&self) -> Decimal {
        self.daily_regular_cap
    }

    /// Wage multiplier applied to overtime hours.
    pub fn default_overtime_multiplier(&self) -> Decimal {
        self.default_overtime_multiplier
    }
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            regular_cutoff: DEFAULT_REGULAR_CUTOFF,
            daily_regular_cap: DEFAULT_DAILY_REGULAR_CAP,
            default_overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

/// Validated billing rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingRules {
    unit_price_per_hour: Decimal,
}

impl BillingRules {
    /// Creates validated billing rules.
    ///
    /// The unit price must not be negative.
    pub fn new(unit_price_per_hour: Decimal) -> EngineResult<Self> {
        if unit_price_per_hour < Decimal::ZERO {
            return Err(EngineError::InvalidConfiguration {
                message: format!(
                    "unit_price_per_hour must not be negative, got {}",
                    unit_price_per_hour
                ),
            });
        }
        Ok(Self { unit_price_per_hour })
    }

    /// Builds validated rules from the raw file structure.
    pub fn from_config(config: &BillingConfig) -> EngineResult<Self> {
        Self::new(config.unit_price_per_hour)
    }

    /// Billing rate in yen per crew-hour.
    pub fn unit_price_per_hour(&self) -> Decimal {
        self.unit_price_per_hour
    }
}

impl Default for BillingRules {
    fn default() -> Self {
        Self {
            unit_price_per_hour: DEFAULT_UNIT_PRICE,
        }
    }
}

/// The complete engine configuration.
///
/// Aggregates the validated rule sets loaded from the configuration
/// directory. [`Default`] returns the standard yard values so the pure
/// calculation functions are usable without touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    shift_rules: ShiftRules,
    billing: BillingRules,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(shift_rules: ShiftRules, billing: BillingRules) -> Self {
        Self {
            shift_rules,
            billing,
        }
    }

    /// Returns the shift rules.
    pub fn shift_rules(&self) -> &ShiftRules {
        &self.shift_rules
    }

    /// Returns the billing rules.
    pub fn billing(&self) -> &BillingRules {
        &self.billing
    }
}
