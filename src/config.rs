//! Session configuration.
//!
//! Configuration is a plain value handed to each [`Calculator`]. Validation
//! uses Stillwater's `Validation` so that every problem in a configuration
//! is reported at once instead of one per attempt.
//!
//! [`Calculator`]: crate::session::Calculator

use crate::error::{ConfigError, ConfigViolation};
use crate::format::NumberFormat;
use crate::input::LengthPolicy;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// User-visible messages shown in place of a result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub division_by_zero: String,
    pub generic: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            division_by_zero: "division by zero".to_string(),
            generic: "Error".to_string(),
        }
    }
}

/// Everything a calculator session needs to know about its environment.
///
/// # Example
///
/// ```rust
/// use tally::config::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(
///     r#"{ "number_format": { "decimal_separator": "." } }"#,
/// )
/// .unwrap();
/// assert_eq!(config.number_format.decimal_separator, '.');
/// assert_eq!(config.length_policy.max_length, 9);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub number_format: NumberFormat,
    pub length_policy: LengthPolicy,
    pub messages: Messages,
    /// Number of keystroke transitions kept per session.
    pub transition_log_limit: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::default(),
            length_policy: LengthPolicy::default(),
            messages: Messages::default(),
            transition_log_limit: 64,
        }
    }
}

impl CalculatorConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.checked()
    }

    /// Return `self` if it is valid, or every violation found.
    pub fn checked(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Run every check, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let format = &self.number_format;
        let separator = format.decimal_separator;

        let checks = vec![
            check(
                !(separator.is_ascii_digit()
                    || separator.is_whitespace()
                    || matches!(separator, '-' | '+' | 'e' | 'E')),
                || ConfigViolation::InvalidSeparator(separator),
            ),
            check(
                format.scientific_threshold.is_finite() && format.scientific_threshold > 0.0,
                || ConfigViolation::InvalidThreshold(format.scientific_threshold),
            ),
            check(self.length_policy.max_length > 0, || {
                ConfigViolation::ZeroTokenLength
            }),
            check(!self.messages.division_by_zero.is_empty(), || {
                ConfigViolation::EmptyMessage {
                    field: "division_by_zero",
                }
            }),
            check(!self.messages.generic.is_empty(), || {
                ConfigViolation::EmptyMessage { field: "generic" }
            }),
        ];

        Validation::all_vec(checks).map(|_| ())
    }
}

fn check(
    ok: bool,
    error: impl FnOnce() -> ConfigViolation,
) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(CalculatorConfig::default().validate().is_success());
    }

    #[test]
    fn defaults_match_comma_convention() {
        let config = CalculatorConfig::default();
        assert_eq!(config.number_format.decimal_separator, ',');
        assert!(!config.number_format.grouping_enabled);
        assert_eq!(config.length_policy.max_length, 9);
        assert!(!config.length_policy.count_separator);
        assert_eq!(config.messages.division_by_zero, "division by zero");
    }

    #[test]
    fn from_json_fills_missing_fields_with_defaults() {
        let config = CalculatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn from_json_reads_nested_sections() {
        let config = CalculatorConfig::from_json(
            r#"{
                "number_format": { "decimal_separator": ".", "grouping_enabled": true },
                "length_policy": { "max_length": 12, "count_separator": true },
                "messages": { "division_by_zero": "cannot divide by zero" },
                "transition_log_limit": 8
            }"#,
        )
        .unwrap();

        assert_eq!(config.number_format.decimal_separator, '.');
        assert!(config.number_format.grouping_enabled);
        assert_eq!(config.length_policy.max_length, 12);
        assert!(config.length_policy.count_separator);
        assert_eq!(config.messages.division_by_zero, "cannot divide by zero");
        assert_eq!(config.messages.generic, "Error");
        assert_eq!(config.transition_log_limit, 8);
    }

    #[test]
    fn from_json_rejects_malformed_json() {
        let err = CalculatorConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = CalculatorConfig {
            number_format: NumberFormat {
                decimal_separator: '5',
                grouping_enabled: false,
                scientific_threshold: -1.0,
            },
            length_policy: LengthPolicy {
                max_length: 0,
                count_separator: false,
            },
            messages: Messages {
                division_by_zero: String::new(),
                generic: "Error".to_string(),
            },
            transition_log_limit: 64,
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::InvalidSeparator('5'))));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::InvalidThreshold(_))));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroTokenLength)));
                assert!(errors.iter().any(|e| matches!(
                    e,
                    ConfigViolation::EmptyMessage {
                        field: "division_by_zero"
                    }
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn whitespace_separator_is_rejected() {
        let json = r#"{ "number_format": { "decimal_separator": " " } }"#;
        match CalculatorConfig::from_json(json) {
            Err(ConfigError::Invalid(errors)) => {
                assert_eq!(errors, vec![ConfigViolation::InvalidSeparator(' ')]);
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn period_convention_with_grouping_is_valid() {
        let json = r#"{ "number_format": { "decimal_separator": ".", "grouping_enabled": true } }"#;
        assert!(CalculatorConfig::from_json(json).is_ok());
    }

    #[test]
    fn checked_reports_every_problem() {
        let config = CalculatorConfig {
            length_policy: LengthPolicy {
                max_length: 0,
                count_separator: false,
            },
            messages: Messages {
                division_by_zero: "x".to_string(),
                generic: String::new(),
            },
            ..CalculatorConfig::default()
        };

        match config.checked() {
            Err(ConfigError::Invalid(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }
}
