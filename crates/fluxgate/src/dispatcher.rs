//! The per-state-type reducer contract.

use std::any::type_name;
use std::fmt::Debug;

use crate::error::{FluxGateError, Result};
use crate::result::DispatchResult;

/// Pure mapping from (current state, action) to the next state.
///
/// One implementation exists per state type. Implementations must not keep
/// mutable state between calls and must not do I/O, which is what makes it
/// safe to share one instance between many stores through an `Arc`.
///
/// When `Action` is a closed enum owned by the state type, an exhaustive
/// `match` is all that is needed. When several state types share one
/// application-level action enum, variants meant for other states are answered
/// with [`unrecognized`].
///
/// # Example
///
/// ```rust
/// use fluxgate::{DispatchResult, Dispatcher, Result};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct CounterState {
///     counter: i32,
///     label: String,
/// }
///
/// #[derive(Debug)]
/// enum CounterAction {
///     Increment(i32),
///     Decrement(i32),
/// }
///
/// struct CounterDispatcher;
///
/// impl Dispatcher for CounterDispatcher {
///     type State = CounterState;
///     type Action = CounterAction;
///
///     fn dispatch(
///         &self,
///         state: &CounterState,
///         action: &CounterAction,
///     ) -> Result<DispatchResult<CounterState>> {
///         let counter = match action {
///             CounterAction::Increment(by) => state.counter.wrapping_add(*by),
///             CounterAction::Decrement(by) => state.counter.wrapping_sub(*by),
///         };
///         Ok(DispatchResult::modified(CounterState { counter, ..state.clone() }))
///     }
/// }
/// ```
pub trait Dispatcher: Send + Sync + 'static {
    /// State managed by this dispatcher, `Default` is the initial value of a new store
    type State: Default + Send + 'static;
    /// Actions understood by this dispatcher
    type Action: Debug;

    /// Compute the next state.
    ///
    /// Returns [`FluxGateError::UnrecognizedAction`] for actions this
    /// dispatcher has no mutation for. The caller's state is left untouched
    /// in that case.
    fn dispatch(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<DispatchResult<Self::State>>;
}

/// Build the error for an action variant the dispatcher of `S` does not handle.
pub fn unrecognized<S>(action: &impl Debug) -> FluxGateError {
    let state = type_name::<S>();
    let action = format!("{:?}", action);
    log::error!("No mutation defined for {} on {}", action, state);
    FluxGateError::UnrecognizedAction { state, action }
}
