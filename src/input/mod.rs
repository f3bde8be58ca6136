//! Keystroke-level accumulation of the number being typed.

use serde::{Deserialize, Serialize};

/// How long a typed token may grow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthPolicy {
    /// Maximum number of counted characters in a token.
    pub max_length: usize,
    /// Whether the decimal separator counts toward `max_length`.
    pub count_separator: bool,
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self {
            max_length: 9,
            count_separator: false,
        }
    }
}

/// The numeric token under construction.
///
/// Starts as `"0"`. The first digit replaces that placeholder, a second
/// decimal separator is ignored and digits beyond the length cap are
/// dropped. After [`restart`](Self::restart) the next keystroke replaces
/// the whole token instead of appending to it.
///
/// # Example
///
/// ```rust
/// use tally::input::{InputBuffer, LengthPolicy};
///
/// let mut input = InputBuffer::new('.', LengthPolicy::default());
/// for key in ['1', '.', '2', '.', '3'] {
///     if key == '.' {
///         input.push_separator();
///     } else {
///         input.push_digit(key);
///     }
/// }
/// assert_eq!(input.as_str(), "1.23");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    separator: char,
    policy: LengthPolicy,
    replace_next: bool,
}

impl InputBuffer {
    pub const INITIAL: &'static str = "0";

    pub fn new(separator: char, policy: LengthPolicy) -> Self {
        Self {
            text: Self::INITIAL.to_string(),
            separator,
            policy,
            replace_next: true,
        }
    }

    /// Current token text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the token still holds the untouched `"0"` placeholder.
    pub fn is_initial(&self) -> bool {
        self.text == Self::INITIAL
    }

    /// Number of characters counted against the length cap.
    pub fn counted_len(&self) -> usize {
        self.text
            .chars()
            .filter(|&c| self.policy.count_separator || c != self.separator)
            .count()
    }

    /// Feed one digit keystroke. Returns `false` when the keystroke was
    /// ignored (not a digit, or the token is full).
    pub fn push_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() {
            return false;
        }
        if self.replace_next || self.is_initial() {
            self.text.clear();
            self.text.push(digit);
            self.replace_next = false;
            return true;
        }
        if self.counted_len() >= self.policy.max_length {
            return false;
        }
        self.text.push(digit);
        true
    }

    /// Feed one decimal separator keystroke. Returns `false` when the
    /// token already has a separator (or has no room for a counted one).
    pub fn push_separator(&mut self) -> bool {
        if self.replace_next {
            // "0" plus the separator
            if self.policy.count_separator && self.policy.max_length < 2 {
                return false;
            }
            self.text.clear();
            self.text.push('0');
            self.text.push(self.separator);
            self.replace_next = false;
            return true;
        }
        if self.text.contains(self.separator) {
            return false;
        }
        if self.policy.count_separator && self.counted_len() >= self.policy.max_length {
            return false;
        }
        self.text.push(self.separator);
        true
    }

    /// Reset to `"0"`; the next keystroke replaces the token.
    pub fn restart(&mut self) {
        self.text.clear();
        self.text.push_str(Self::INITIAL);
        self.replace_next = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period_buffer() -> InputBuffer {
        InputBuffer::new('.', LengthPolicy::default())
    }

    #[test]
    fn starts_with_zero() {
        let input = period_buffer();
        assert_eq!(input.as_str(), "0");
        assert!(input.is_initial());
    }

    #[test]
    fn first_digit_replaces_zero() {
        let mut input = period_buffer();
        assert!(input.push_digit('7'));
        assert_eq!(input.as_str(), "7");
        assert!(input.push_digit('3'));
        assert_eq!(input.as_str(), "73");
    }

    #[test]
    fn zero_keystrokes_keep_single_zero() {
        let mut input = period_buffer();
        input.push_digit('0');
        input.push_digit('0');
        assert_eq!(input.as_str(), "0");
        input.push_digit('5');
        assert_eq!(input.as_str(), "5");
    }

    #[test]
    fn separator_on_zero_keeps_leading_zero() {
        let mut input = InputBuffer::new(',', LengthPolicy::default());
        assert!(input.push_separator());
        assert_eq!(input.as_str(), "0,");
        input.push_digit('5');
        assert_eq!(input.as_str(), "0,5");
    }

    #[test]
    fn second_separator_is_ignored() {
        let mut input = period_buffer();
        input.push_digit('1');
        assert!(input.push_separator());
        input.push_digit('2');
        assert!(!input.push_separator());
        input.push_digit('3');
        assert_eq!(input.as_str(), "1.23");
    }

    #[test]
    fn digits_beyond_cap_are_dropped() {
        let mut input = period_buffer();
        for digit in "123456789012".chars() {
            input.push_digit(digit);
        }
        assert_eq!(input.as_str(), "123456789");
        assert_eq!(input.counted_len(), 9);
    }

    #[test]
    fn separator_does_not_count_by_default() {
        let mut input = period_buffer();
        input.push_digit('1');
        input.push_separator();
        for digit in "2345678999".chars() {
            input.push_digit(digit);
        }
        assert_eq!(input.as_str(), "1.23456789");
        assert_eq!(input.counted_len(), 9);
    }

    #[test]
    fn separator_counts_when_policy_says_so() {
        let policy = LengthPolicy {
            max_length: 9,
            count_separator: true,
        };
        let mut input = InputBuffer::new('.', policy);
        input.push_digit('1');
        input.push_separator();
        for digit in "2345678999".chars() {
            input.push_digit(digit);
        }
        assert_eq!(input.as_str(), "1.2345678");

        let mut full = InputBuffer::new('.', LengthPolicy {
            max_length: 3,
            count_separator: true,
        });
        for digit in "123".chars() {
            full.push_digit(digit);
        }
        assert!(!full.push_separator());
    }

    #[test]
    fn non_digit_keystroke_is_ignored() {
        let mut input = period_buffer();
        input.push_digit('4');
        assert!(!input.push_digit('a'));
        assert!(!input.push_digit('-'));
        assert_eq!(input.as_str(), "4");
    }

    #[test]
    fn restart_makes_next_digit_replace() {
        let mut input = period_buffer();
        input.push_digit('4');
        input.push_separator();
        input.push_digit('2');
        input.restart();
        assert_eq!(input.as_str(), "0");

        input.push_digit('9');
        assert_eq!(input.as_str(), "9");
    }

    #[test]
    fn restart_then_separator_starts_fraction() {
        let mut input = period_buffer();
        input.push_digit('8');
        input.restart();
        input.push_separator();
        assert_eq!(input.as_str(), "0.");
    }

    #[test]
    fn separator_after_restart_respects_counting_cap() {
        let policy = LengthPolicy {
            max_length: 1,
            count_separator: true,
        };
        let mut input = InputBuffer::new(',', policy);
        assert!(!input.push_separator());
        assert_eq!(input.as_str(), "0");
        assert!(input.counted_len() <= 1);

        input.push_digit('4');
        input.restart();
        assert!(!input.push_separator());
        assert_eq!(input.as_str(), "0");

        let mut roomy = InputBuffer::new(',', LengthPolicy {
            max_length: 2,
            count_separator: true,
        });
        assert!(roomy.push_separator());
        assert_eq!(roomy.as_str(), "0,");
        assert!(!roomy.push_digit('5'));
    }
}
