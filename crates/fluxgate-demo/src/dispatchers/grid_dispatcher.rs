use fluxgate::{unrecognized, DispatchResult, Dispatcher, Result};

use crate::actions::{Action, GridAction};
use crate::state::GridState;

#[derive(Debug)]
pub struct GridDispatcher;

impl Dispatcher for GridDispatcher {
    type State = GridState;
    type Action = Action;

    fn dispatch(&self, _state: &GridState, action: &Action) -> Result<DispatchResult<GridState>> {
        match action {
            Action::Grid(GridAction::UpdatePaging {
                start_index,
                page_size,
            }) => Ok(DispatchResult::modified(GridState {
                start_index: *start_index,
                page_size: *page_size,
            })),
            other => Err(unrecognized::<GridState>(other)),
        }
    }
}
