//! Client-side pagination
//!
//! The full collection lives in memory; the pager only slices it. The page
//! index is clamped whenever the backing length changes, so a delete that
//! shrinks the list can never leave the view on an empty page.

/// Page size for the custom order table
pub const CUSTOM_ORDERS_PAGE_SIZE: usize = 3;
/// Page size for the order and menu tables
pub const ORDERS_PAGE_SIZE: usize = 5;

/// 1-based page cursor over an in-memory list
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Pull the page back into `[1, max(total_pages, 1)]` after the backing
    /// list changed length
    pub fn clamp(&mut self, len: usize) {
        self.page = self.page.min(self.total_pages(len).max(1));
    }

    pub fn next_page(&mut self, len: usize) {
        if self.page < self.total_pages(len) {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// The current page's window of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}
