//! Pagination envelope shared by paginated queries.

use serde::{Deserialize, Serialize};

/// One page of results plus a flag telling the caller whether another page
/// follows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub has_next_page: bool,
}

impl<T> Paginated<T> {
    /// Wrap a fetched page slice.
    ///
    /// `has_next_page` holds exactly when `page_number` is below
    /// `ceil(total / page_size)`; page numbers are 1-indexed.
    pub fn new(data: Vec<T>, page_number: i64, page_size: i64, total: i64) -> Self {
        Self {
            data,
            has_next_page: page_number < total_pages(total, page_size),
        }
    }
}

/// Number of pages needed to hold `total` items at `page_size` per page.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    let page_size = page_size.max(1);
    (total + page_size - 1) / page_size
}
