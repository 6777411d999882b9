//! Counter State

/// Click counter, one per session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    pub counter: i32,
}
