//! Pagination module
//!
//! List endpoints return one page at a time with a `has_more` flag. The
//! pager moves a cursor through the list by feeding the id of the last item
//! back as `starting_after`.
//!
//! # Overview
//!
//! - **Forward**: the default, cursor taken from the last item
//! - **Backward**: when the caller set `ending_before` (and not
//!   `starting_after`), cursor taken from the first item
//! - Stops when `has_more` is false or a page comes back empty

mod pager;
mod types;

pub use pager::ListPager;
pub use types::{Direction, PaginationState};
