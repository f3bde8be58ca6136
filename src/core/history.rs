//! The pending calculation: numbers and operations in entry order.

use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// One entry of a [`CalculationHistory`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum HistoryItem {
    Number(f64),
    Operation(Operation),
}

impl HistoryItem {
    pub fn as_operation(&self) -> Option<Operation> {
        match self {
            Self::Number(_) => None,
            Self::Operation(op) => Some(*op),
        }
    }
}

/// Ordered sequence of numbers and operations entered since the last
/// clear or completed evaluation.
///
/// A well-formed history alternates `Number, Operation, Number, ...` and,
/// once complete, ends with a number. The controlling session only ever
/// appends a `[number, operation]` pair on an operator key and a single
/// number on the equals key, which keeps that shape.
///
/// # Example
///
/// ```rust
/// use tally::core::{CalculationHistory, HistoryItem, Operation};
///
/// let mut history = CalculationHistory::new();
/// history.push_operand(2.0, Operation::Add);
/// assert!(history.awaits_operand());
///
/// history.push_number(3.0);
/// assert!(history.is_complete());
/// assert_eq!(history.items()[1], HistoryItem::Operation(Operation::Add));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    items: Vec<HistoryItem>,
}

impl CalculationHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a number followed by the operation that will consume it.
    pub fn push_operand(&mut self, value: f64, op: Operation) {
        self.items.push(HistoryItem::Number(value));
        self.items.push(HistoryItem::Operation(op));
    }

    /// Append the final number of the calculation.
    pub fn push_number(&mut self, value: f64) {
        self.items.push(HistoryItem::Number(value));
    }

    /// Whether the most recent entry is an operation still waiting for its
    /// right-hand number.
    pub fn awaits_operand(&self) -> bool {
        matches!(self.items.last(), Some(HistoryItem::Operation(_)))
    }

    /// The operation waiting for its right-hand number, if any.
    pub fn pending_operation(&self) -> Option<Operation> {
        self.items.last().and_then(HistoryItem::as_operation)
    }

    /// Check the alternation invariant, allowing a trailing operation.
    pub fn is_well_formed(&self) -> bool {
        self.items.iter().enumerate().all(|(index, item)| {
            matches!(
                (index % 2, item),
                (0, HistoryItem::Number(_)) | (1, HistoryItem::Operation(_))
            )
        })
    }

    /// Well-formed, non-empty and ending with a number.
    pub fn is_complete(&self) -> bool {
        self.is_well_formed() && self.items.len() % 2 == 1
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl FromIterator<HistoryItem> for CalculationHistory {
    fn from_iter<I: IntoIterator<Item = HistoryItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
