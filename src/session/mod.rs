//! Keystroke-driven calculator sessions.
//!
//! A [`Calculator`] owns everything a session mutates: the pending
//! [`CalculationHistory`], the token being typed, and the text on display.
//! Sessions share nothing, so independent sessions can live side by side
//! (one per user, one per connection) without synchronization.
//!
//! # Example
//!
//! ```rust
//! use tally::session::Calculator;
//!
//! let mut calc = Calculator::default();
//! calc.press_digit('2');
//! calc.press_operator("+");
//! calc.press_digit('3');
//! calc.press_operator("x");
//! calc.press_digit('4');
//! calc.press_equals();
//!
//! // strictly left to right: (2 + 3) * 4
//! assert_eq!(calc.current_display(), "20");
//! ```

mod log;

pub use log::{KeyTransition, TransitionLog};

use crate::config::CalculatorConfig;
use crate::core::{evaluate, CalcState, CalculationHistory, Operation};
use crate::error::{CalculationError, ConfigError};
use crate::input::InputBuffer;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// Identifies one calculator session in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A discrete keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Digit(char),
    Separator,
    Operator(Operation),
    Equals,
    Clear,
}

/// What the session currently shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum DisplayState {
    /// The token being typed (or the `"0"` placeholder).
    Entry(String),
    /// A formatted result.
    Value(String),
    /// A user-visible error message.
    Error(String),
}

impl DisplayState {
    pub fn text(&self) -> &str {
        match self {
            Self::Entry(text) | Self::Value(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// One calculator session.
pub struct Calculator {
    id: SessionId,
    config: CalculatorConfig,
    state: CalcState,
    history: CalculationHistory,
    input: InputBuffer,
    last_result: Option<f64>,
    display: DisplayState,
    log: TransitionLog<CalcState>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_config(CalculatorConfig::default())
    }
}

impl Calculator {
    /// Create a session after validating `config`.
    pub fn new(config: CalculatorConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_config(config.checked()?))
    }

    fn with_config(config: CalculatorConfig) -> Self {
        let input = InputBuffer::new(
            config.number_format.decimal_separator,
            config.length_policy.clone(),
        );
        let display = DisplayState::Entry(input.as_str().to_string());
        let log = TransitionLog::new(config.transition_log_limit);
        Self {
            id: SessionId::new(),
            config,
            state: CalcState::Empty,
            history: CalculationHistory::new(),
            input,
            last_result: None,
            display,
            log,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn state(&self) -> CalcState {
        self.state
    }

    pub fn history(&self) -> &CalculationHistory {
        &self.history
    }

    /// The token being typed.
    pub fn token(&self) -> &str {
        self.input.as_str()
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Text currently on display. Never mutates the session.
    pub fn current_display(&self) -> &str {
        self.display.text()
    }

    pub fn transitions(&self) -> &TransitionLog<CalcState> {
        &self.log
    }

    pub fn press_digit(&mut self, digit: char) -> &DisplayState {
        self.press(Key::Digit(digit))
    }

    pub fn press_separator(&mut self) -> &DisplayState {
        self.press(Key::Separator)
    }

    /// Enter the operator labelled `token`; unknown labels are ignored.
    pub fn press_operator(&mut self, token: &str) -> &DisplayState {
        match Operation::from_token(token) {
            Some(op) => self.press(Key::Operator(op)),
            None => {
                trace!(session = %self.id, token, "ignored unknown operator token");
                &self.display
            }
        }
    }

    pub fn press_equals(&mut self) -> &DisplayState {
        self.press(Key::Equals)
    }

    pub fn press_clear(&mut self) -> &DisplayState {
        self.press(Key::Clear)
    }

    /// Feed one keystroke and return the updated display.
    pub fn press(&mut self, key: Key) -> &DisplayState {
        let from = self.state;
        let accepted = match key {
            Key::Digit(digit) => self.enter_digit(digit),
            Key::Separator => self.enter_separator(),
            Key::Operator(op) => self.enter_operator(op),
            Key::Equals => self.enter_equals(),
            Key::Clear => {
                self.clear();
                true
            }
        };

        if !accepted {
            trace!(session = %self.id, state = %from, ?key, "ignored keystroke");
        } else if from != self.state || matches!(key, Key::Equals | Key::Clear) {
            debug!(session = %self.id, %from, to = %self.state, ?key, "transition");
            self.log.record(KeyTransition {
                from,
                to: self.state,
                key,
                timestamp: Utc::now(),
            });
        }
        &self.display
    }

    fn enter_digit(&mut self, digit: char) -> bool {
        if !self.input.push_digit(digit) {
            return false;
        }
        self.show_entry(CalcState::Accumulating);
        true
    }

    fn enter_separator(&mut self) -> bool {
        if !self.input.push_separator() {
            return false;
        }
        self.show_entry(CalcState::Accumulating);
        true
    }

    fn enter_operator(&mut self, op: Operation) -> bool {
        // an operator right after another keeps the pending one
        if matches!(self.state, CalcState::AwaitingOperand | CalcState::Error) {
            return false;
        }
        let Some(value) = self.pending_operand() else {
            return false;
        };

        self.history.push_operand(value, op);
        self.input.restart();
        self.last_result = None;
        self.show_entry(CalcState::AwaitingOperand);
        true
    }

    fn enter_equals(&mut self) -> bool {
        if self.state == CalcState::Error {
            return false;
        }
        let Some(value) = self.pending_operand() else {
            return false;
        };

        self.history.push_number(value);
        let outcome = evaluate(&self.history);
        self.history.clear();
        self.input.restart();

        match outcome {
            Ok(result) => {
                self.last_result = Some(result);
                self.state = CalcState::Result;
                self.display = DisplayState::Value(self.config.number_format.format(result));
            }
            Err(err) => {
                warn!(session = %self.id, error = %err, "calculation failed");
                self.last_result = None;
                self.state = CalcState::Error;
                self.display = DisplayState::Error(self.message_for(err).to_string());
            }
        }
        true
    }

    fn clear(&mut self) {
        self.history.clear();
        self.input.restart();
        self.last_result = None;
        self.show_entry(CalcState::Empty);
    }

    /// The number the next operator or equals keystroke commits.
    fn pending_operand(&self) -> Option<f64> {
        match self.state {
            CalcState::Result => self.last_result,
            _ => self.config.number_format.parse(self.input.as_str()),
        }
    }

    fn show_entry(&mut self, state: CalcState) {
        self.state = state;
        self.display = DisplayState::Entry(self.input.as_str().to_string());
    }

    fn message_for(&self, err: CalculationError) -> &str {
        match err {
            CalculationError::DivisionByZero(_) => &self.config.messages.division_by_zero,
            CalculationError::NonFinite => &self.config.messages.generic,
        }
    }
}
