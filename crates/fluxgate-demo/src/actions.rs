//! Actions for all state types of the demo.
//!
//! Actions are grouped by the state they affect. Every dispatcher handles its
//! own group and refuses the others.

use crate::paging::PageRequest;

/// Fallback page size when a page request does not carry a count
pub const DEFAULT_REQUEST_COUNT: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Counter(CounterAction),
    Grid(GridAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment(i32),
    Decrement(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    UpdatePaging { start_index: usize, page_size: usize },
}

impl GridAction {
    /// Translate a grid's page request into a paging update
    pub fn from_page_request(request: &PageRequest) -> Self {
        GridAction::UpdatePaging {
            start_index: request.start_index,
            page_size: request.count.unwrap_or(DEFAULT_REQUEST_COUNT),
        }
    }
}

impl From<CounterAction> for Action {
    fn from(action: CounterAction) -> Self {
        Action::Counter(action)
    }
}

impl From<GridAction> for Action {
    fn from(action: GridAction) -> Self {
        Action::Grid(action)
    }
}
