//! Engine states and the trait used to inspect them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States describe where a session currently is
/// and are recorded in the session's transition log.
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Where a calculator session is in its keystroke cycle.
    ///
    /// Every state accepts a clear keystroke.
    pub enum CalcState {
        /// Fresh session, token is `"0"`, history empty.
        Empty,
        /// A number is being typed.
        Accumulating,
        /// An operator was just entered; the token shows `"0"`.
        AwaitingOperand,
        /// A computed value is displayed.
        Result,
        /// An error message is displayed.
        Error,
    }
    error: [Error]
}

impl Default for CalcState {
    fn default() -> Self {
        Self::Empty
    }
}
