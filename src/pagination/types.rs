//! Pagination state types

use crate::params::ListParams;

/// Which way the cursor moves through a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// `starting_after` the last item of each page
    #[default]
    Forward,
    /// `ending_before` the first item of each page
    Backward,
}

impl Direction {
    /// Direction implied by the caller's list parameters
    pub fn from_params(list: &ListParams) -> Self {
        if list.ending_before.is_some() && list.starting_after.is_none() {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Which way the cursor moves
    pub direction: Direction,
    /// Current cursor value
    pub cursor: Option<String>,
    /// Pages fetched so far
    pub pages: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }

    /// Record a fetched page
    pub fn add_page(&mut self, count: usize) {
        self.pages += 1;
        self.total_fetched += count as u64;
    }
}
