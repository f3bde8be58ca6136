//! Tally: a sequential keypad calculator engine
//!
//! Tally turns discrete keystrokes (digits, a decimal separator, operators,
//! equals and clear) into display text. Calculations are evaluated strictly
//! in the order they were entered: `2 + 3 * 4` is `20`, not `14`.
//!
//! # Core Concepts
//!
//! - **Operation**: the four arithmetic operations and their key tokens
//! - **History**: numbers and operations entered since the last result
//! - **NumberFormat**: parsing and formatting under an explicit decimal convention
//! - **InputBuffer**: the number being typed, with its length cap
//! - **Calculator**: one isolated session tying the above together
//!
//! # Example
//!
//! ```rust
//! use tally::{Calculator, CalcState};
//!
//! let mut calc = Calculator::default();
//! calc.press_digit('1');
//! calc.press_digit('0');
//! calc.press_operator("/");
//! calc.press_digit('0');
//! calc.press_equals();
//!
//! assert_eq!(calc.state(), CalcState::Error);
//! assert_eq!(calc.current_display(), "division by zero");
//!
//! calc.press_clear();
//! assert_eq!(calc.current_display(), "0");
//! ```

mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod input;
pub mod session;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use crate::core::{CalcState, CalculationHistory, HistoryItem, Operation, State};
pub use error::{CalculationError, ConfigError, DivisionByZero};
pub use format::NumberFormat;
pub use input::{InputBuffer, LengthPolicy};
pub use session::{Calculator, DisplayState, Key};
