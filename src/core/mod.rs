//! Pure calculation core.
//!
//! This module contains the parts of the engine with no session state:
//! - Operations and how they apply to two numbers
//! - The history of numbers and operations awaiting evaluation
//! - Left-to-right reduction of that history
//! - The states a session moves through

mod evaluate;
mod history;
mod operation;
mod state;

pub use evaluate::evaluate;
pub use history::{CalculationHistory, HistoryItem};
pub use operation::{Operation, UnknownOperator};
pub use state::{CalcState, State};
