mod counter;
mod grid;

pub use counter::CounterState;
pub use grid::GridState;
