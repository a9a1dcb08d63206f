//! Error types for the labor engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during hour splitting, payroll
//! calculation, and configuration loading.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the labor engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use labor_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Loaded configuration values failed validation.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// A description of the invalid value.
        message: String,
    },

    /// A work interval ended at or before it started.
    #[error("Invalid work interval: end time {} is not after start time {}", end.format("%H:%M"), start.format("%H:%M"))]
    InvalidInterval {
        /// The interval's start time.
        start: NaiveTime,
        /// The interval's end time.
        end: NaiveTime,
    },

    /// A break duration was negative.
    #[error("Invalid break duration: {break_hours} hours")]
    InvalidBreak {
        /// The negative break duration that was supplied.
        break_hours: Decimal,
    },

    /// A billing period string could not be parsed as `YYYY-MM`.
    #[error("Invalid billing period: '{value}' is not in YYYY-MM format")]
    InvalidPeriod {
        /// The string that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
