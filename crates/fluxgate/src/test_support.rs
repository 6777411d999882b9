//! State types and dispatchers shared by the unit tests.

use crate::dispatcher::{unrecognized, Dispatcher};
use crate::error::Result;
use crate::result::DispatchResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    pub counter: i32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    Increment(i32),
    Decrement(i32),
    /// Refused when the counter would go below zero
    TryDecrement(i32),
    /// Applied without an effective change
    Touch,
}

#[derive(Debug)]
pub struct CounterDispatcher;

impl Dispatcher for CounterDispatcher {
    type State = CounterState;
    type Action = CounterAction;

    fn dispatch(
        &self,
        state: &CounterState,
        action: &CounterAction,
    ) -> Result<DispatchResult<CounterState>> {
        let result = match action {
            CounterAction::Increment(by) => DispatchResult::modified(CounterState {
                counter: state.counter.wrapping_add(*by),
                ..state.clone()
            }),
            CounterAction::Decrement(by) => DispatchResult::modified(CounterState {
                counter: state.counter.wrapping_sub(*by),
                ..state.clone()
            }),
            CounterAction::TryDecrement(by) if state.counter < *by => {
                DispatchResult::rejected(state.clone())
            }
            CounterAction::TryDecrement(by) => DispatchResult::modified(CounterState {
                counter: state.counter.wrapping_sub(*by),
                ..state.clone()
            }),
            CounterAction::Touch => DispatchResult::unchanged(state.clone()),
        };
        Ok(result)
    }
}

/// A second state type sharing one action enum with the counter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelState {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Counter(CounterAction),
    SetLabel(String),
}

#[derive(Debug)]
pub struct LabelDispatcher;

impl Dispatcher for LabelDispatcher {
    type State = LabelState;
    type Action = AppAction;

    fn dispatch(
        &self,
        _state: &LabelState,
        action: &AppAction,
    ) -> Result<DispatchResult<LabelState>> {
        match action {
            AppAction::SetLabel(text) => Ok(DispatchResult::modified(LabelState {
                text: text.clone(),
            })),
            other => Err(unrecognized::<LabelState>(other)),
        }
    }
}
