//! Grid paging state

use crate::actions::DEFAULT_REQUEST_COUNT;
use crate::paging::PageRequest;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Paging window of one grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub start_index: usize,
    pub page_size: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            start_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl GridState {
    pub fn new(start_index: usize, page_size: usize) -> Self {
        Self {
            start_index,
            page_size,
        }
    }

    pub fn from_page_request(request: &PageRequest) -> Self {
        Self::new(
            request.start_index,
            request.count.unwrap_or(DEFAULT_REQUEST_COUNT),
        )
    }

    /// Zero-based page index, 0 for an empty page size
    pub fn page(&self) -> usize {
        self.start_index.checked_div(self.page_size).unwrap_or(0)
    }

    /// The request that fetches the rows of the current page
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.start_index, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_page() {
        let state = GridState::default();
        assert_eq!(state.start_index, 0);
        assert_eq!(state.page_size, 10);
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn test_page_index() {
        assert_eq!(GridState::new(20, 10).page(), 2);
        assert_eq!(GridState::new(25, 10).page(), 2);
        assert_eq!(GridState::new(30, 0).page(), 0);
    }

    #[test]
    fn test_from_page_request() {
        let state = GridState::from_page_request(&PageRequest {
            start_index: 40,
            count: None,
        });
        assert_eq!(state, GridState::new(40, DEFAULT_REQUEST_COUNT));
        assert_eq!(state.page_request(), PageRequest::new(40, DEFAULT_REQUEST_COUNT));
    }
}
