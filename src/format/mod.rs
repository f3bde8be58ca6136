//! Conversion between display text and numbers under a decimal convention.
//!
//! The convention is an explicit value passed to each session, never read
//! from the process locale.

use serde::{Deserialize, Serialize};

/// Decimal convention used to parse typed numbers and format results.
///
/// # Example
///
/// ```rust
/// use tally::format::NumberFormat;
///
/// let format = NumberFormat::default();
/// assert_eq!(format.parse("12,5"), Some(12.5));
/// assert_eq!(format.format(12.5), "12,5");
/// assert_eq!(format.format(2_500_000_000.0), "2.50e9");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Fractional separator, `,` by default.
    pub decimal_separator: char,
    /// Insert grouping separators every three integer digits.
    pub grouping_enabled: bool,
    /// Magnitudes strictly above this are shown in scientific notation.
    pub scientific_threshold: f64,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            grouping_enabled: false,
            scientific_threshold: 1_000_000_000.0,
        }
    }
}

impl NumberFormat {
    /// Period-separated convention with grouping disabled.
    pub fn period() -> Self {
        Self {
            decimal_separator: '.',
            ..Self::default()
        }
    }

    /// The grouping character paired with the decimal separator.
    pub fn grouping_separator(&self) -> char {
        if self.decimal_separator == ',' {
            ' '
        } else {
            ','
        }
    }

    /// Parse user-facing text into a number.
    ///
    /// Returns `None` for empty text, more than one decimal separator,
    /// or any character that is not a digit, the separator, a leading
    /// minus sign or (with grouping enabled) a grouping separator between
    /// three-digit groups of the integer part.
    pub fn parse(&self, text: &str) -> Option<f64> {
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let mut parts = unsigned.split(self.decimal_separator);
        let integer = parts.next()?;
        let fraction = parts.next();
        if parts.next().is_some() {
            return None;
        }

        let integer = self.strip_grouping(integer)?;
        let fraction = fraction.unwrap_or("");
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let literal = format!(
            "{}{}.{}",
            if negative { "-" } else { "" },
            if integer.is_empty() { "0" } else { integer.as_str() },
            if fraction.is_empty() { "0" } else { fraction },
        );
        literal.parse().ok()
    }

    /// Format a number for display.
    ///
    /// Values whose magnitude exceeds the scientific threshold are shown
    /// with two fractional digits in scientific notation (`2.50e9`); the
    /// mantissa always uses a period. Everything else is written in full
    /// with the shortest digits that parse back to the same value.
    pub fn format(&self, value: f64) -> String {
        if value.abs() > self.scientific_threshold {
            return format!("{value:.2e}");
        }
        // -0 displays as 0
        let value = if value == 0.0 { 0.0 } else { value };

        let plain = value.to_string();
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let mut out = String::with_capacity(plain.len() + integer.len() / 3);
        out.push_str(sign);
        if self.grouping_enabled {
            out.push_str(&group_digits(integer, self.grouping_separator()));
        } else {
            out.push_str(integer);
        }
        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }

    /// Canonical display form of typed text, e.g. `"007,50"` becomes `"7,5"`.
    pub fn normalize(&self, text: &str) -> Option<String> {
        self.parse(text).map(|value| self.format(value))
    }

    /// Digits of the integer part. With grouping enabled, separators must
    /// split it into a leading group of one to three digits followed by
    /// groups of exactly three.
    fn strip_grouping(&self, integer: &str) -> Option<String> {
        let all_digits = |group: &str| group.chars().all(|c| c.is_ascii_digit());
        if !self.grouping_enabled || !integer.contains(self.grouping_separator()) {
            return all_digits(integer).then(|| integer.to_string());
        }

        let mut groups = integer.split(self.grouping_separator());
        let lead = groups.next()?;
        if !(1..=3).contains(&lead.len()) || !all_digits(lead) {
            return None;
        }
        let mut digits = lead.to_string();
        for group in groups {
            if group.len() != 3 || !all_digits(group) {
                return None;
            }
            digits.push_str(group);
        }
        Some(digits)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
