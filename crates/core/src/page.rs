//! Pagination primitives shared by the repository layer.

use serde::Serialize;

/// Page size applied when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// A zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: i64,
    /// Elements per page. At least 1; no upper bound is enforced here.
    pub size: i64,
}

impl PageRequest {
    /// Build a request from raw caller values. A negative page index
    /// falls back to the first page and a non-positive size to
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn from_params(page: Option<i64>, size: Option<i64>) -> Self {
        let page = page.unwrap_or(0).max(0);
        let size = match size {
            Some(s) if s >= 1 => s,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, size }
    }

    /// Row offset of the first element of this page.
    pub fn offset(&self) -> i64 {
        self.page * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::from_params(None, None)
    }
}

/// One page of listing results plus total-count metadata. `page` and
/// `size` echo the request that produced the page.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub page: i64,
    pub size: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: i64, request: &PageRequest) -> Self {
        Self {
            content,
            total_elements,
            page: request.page,
            size: request.size,
        }
    }
}
