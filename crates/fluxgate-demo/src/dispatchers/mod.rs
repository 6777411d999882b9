//! Dispatchers - one per state type, shared by every store of that type

mod counter_dispatcher;
mod grid_dispatcher;

pub use counter_dispatcher::CounterDispatcher;
pub use grid_dispatcher::GridDispatcher;
