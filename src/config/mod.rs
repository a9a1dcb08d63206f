//! Configuration loading and management for the labor engine.
//!
//! This module provides functionality to load the yard's shift and billing
//! rules from YAML files and exposes the validated configuration.
//!
//! # Example
//!
//! ```no_run
//! use labor_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/yard").unwrap();
//! println!("Unit price: {}", config.billing().unit_price_per_hour());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BillingConfig, BillingRules, DEFAULT_DAILY_REGULAR_CAP, DEFAULT_OVERTIME_MULTIPLIER,
    DEFAULT_REGULAR_CUTOFF, DEFAULT_UNIT_PRICE, EngineConfig, ShiftRules, ShiftRulesConfig,
};
