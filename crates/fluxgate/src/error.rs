//! Error type for the dispatch core.
//!
//! Only wiring mistakes are errors. Data-shaped outcomes such as a duplicate
//! key on insert or a missing key on lookup are plain `bool`/`Option` values.

use thiserror::Error;

/// Errors raised by dispatchers, stores and keyed maps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FluxGateError {
    /// A dispatcher received an action variant it has no mutation for.
    ///
    /// This means the wrong dispatcher was paired with the action and is never
    /// worth retrying.
    #[error("No mutation defined for {action} on {state}")]
    UnrecognizedAction {
        /// Type name of the state the dispatcher manages
        state: &'static str,
        /// Debug rendering of the offending action
        action: String,
    },

    /// No dispatcher was registered for a state type at construction time.
    #[error("No dispatcher registered for {state}")]
    MissingDispatcher {
        /// Type name of the state that has no dispatcher
        state: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, FluxGateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_action_message() {
        let err = FluxGateError::UnrecognizedAction {
            state: "CounterState",
            action: "Reset".to_string(),
        };
        assert_eq!(err.to_string(), "No mutation defined for Reset on CounterState");
    }

    #[test]
    fn test_missing_dispatcher_message() {
        let err = FluxGateError::MissingDispatcher {
            state: "GridState",
        };
        assert_eq!(err.to_string(), "No dispatcher registered for GridState");
    }
}
