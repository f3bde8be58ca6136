//! The four arithmetic operations a calculator key can enter.

use crate::error::DivisionByZero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary arithmetic operation.
///
/// Operations are plain values: they carry no state and applying one
/// has no side effects.
///
/// # Example
///
/// ```rust
/// use tally::core::Operation;
///
/// let op = Operation::from_token("x").unwrap();
/// assert_eq!(op, Operation::Multiply);
/// assert_eq!(op.token(), "*");
/// assert_eq!(op.apply(6.0, 7.0), Ok(42.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Look up the operation entered by a key label.
    ///
    /// `*`, `x` and `X` all mean multiplication. Returns `None` for any
    /// other label; callers treat that as an ignored keystroke.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" | "x" | "X" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Canonical display token.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operation to `lhs` and `rhs`.
    ///
    /// Division fails only when `rhs` is exactly zero (either sign).
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, DivisionByZero> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when parsing an unknown operator token via [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator token '{0}'")]
pub struct UnknownOperator(pub String);

impl FromStr for Operation {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownOperator(s.to_string()))
    }
}
