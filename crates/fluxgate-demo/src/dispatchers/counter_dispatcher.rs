use fluxgate::{unrecognized, DispatchResult, Dispatcher, Result};

use crate::actions::{Action, CounterAction};
use crate::state::CounterState;

#[derive(Debug)]
pub struct CounterDispatcher;

impl Dispatcher for CounterDispatcher {
    type State = CounterState;
    type Action = Action;

    fn dispatch(
        &self,
        state: &CounterState,
        action: &Action,
    ) -> Result<DispatchResult<CounterState>> {
        match action {
            Action::Counter(counter_action) => Ok(mutate(state, counter_action)),
            other => Err(unrecognized::<CounterState>(other)),
        }
    }
}

fn mutate(state: &CounterState, action: &CounterAction) -> DispatchResult<CounterState> {
    // Wraps on overflow instead of panicking
    let counter = match action {
        CounterAction::Increment(by) => state.counter.wrapping_add(*by),
        CounterAction::Decrement(by) => state.counter.wrapping_sub(*by),
    };
    DispatchResult::modified(CounterState { counter })
}
