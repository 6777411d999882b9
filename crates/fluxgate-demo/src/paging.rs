//! Paging contract between grids and data sources

/// A window of rows requested by a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub start_index: usize,
    /// `None` lets the receiver pick its own default
    pub count: Option<usize>,
}

impl PageRequest {
    pub fn new(start_index: usize, count: usize) -> Self {
        Self {
            start_index,
            count: Some(count),
        }
    }
}

/// One page of items plus the size of the whole data set
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_item_count: usize,
}
