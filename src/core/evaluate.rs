//! Left-to-right reduction of a calculation history.

use super::history::{CalculationHistory, HistoryItem};
use crate::error::CalculationError;

/// Reduce `history` strictly in entry order, ignoring operator precedence.
///
/// An empty history (or one that does not start with a number) evaluates
/// to `0`. Reduction stops early, returning the accumulator so far, at the
/// first `(operation, number)` pair that is not shaped that way. Any
/// failing step aborts the whole reduction.
///
/// # Example
///
/// ```rust
/// use tally::core::{evaluate, CalculationHistory, Operation};
///
/// let mut history = CalculationHistory::new();
/// history.push_operand(2.0, Operation::Add);
/// history.push_operand(3.0, Operation::Multiply);
/// history.push_number(4.0);
///
/// // (2 + 3) * 4, not 2 + (3 * 4)
/// assert_eq!(evaluate(&history), Ok(20.0));
/// ```
pub fn evaluate(history: &CalculationHistory) -> Result<f64, CalculationError> {
    let items = history.items();
    let Some(HistoryItem::Number(first)) = items.first() else {
        return Ok(0.0);
    };

    let mut acc = *first;
    for pair in items[1..].chunks(2) {
        let [HistoryItem::Operation(op), HistoryItem::Number(rhs)] = pair else {
            break;
        };
        acc = op.apply(acc, *rhs)?;
        if !acc.is_finite() {
            return Err(CalculationError::NonFinite);
        }
    }
    Ok(acc)
}
