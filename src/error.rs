//! Error types for calculation and configuration.

use thiserror::Error;

/// Raised by [`Operation::apply`](crate::core::Operation::apply) when the
/// divisor is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("division by zero")]
pub struct DivisionByZero;

/// Errors that abort a reduction of the calculation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZero),

    /// A step overflowed to infinity or produced NaN.
    #[error("result is not a finite number")]
    NonFinite,
}

/// A single problem found while validating a configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigViolation {
    #[error("Decimal separator '{0}' cannot be a digit, sign, exponent marker or whitespace")]
    InvalidSeparator(char),

    #[error("Maximum token length must be at least 1")]
    ZeroTokenLength,

    #[error("Scientific threshold must be a positive finite number (got {0})")]
    InvalidThreshold(f64),

    #[error("Message '{field}' must not be empty")]
    EmptyMessage { field: &'static str },
}

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
