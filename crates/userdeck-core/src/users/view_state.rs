//! Search and page state for the user list.

use crate::users::query::{self, PageView};
use crate::users::types::UserRecord;

/// Query text, current page and page size of the user list.
///
/// Changing the query always returns to page 1. Page navigation is
/// clamped to `[1, total_pages]` for the records it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    query: String,
    page: usize,
    page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the query. Returns true if it changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        self.query = query;
        self.page = 1;
        true
    }

    pub fn push_char(&mut self, c: char) {
        let mut query = self.query.clone();
        query.push(c);
        self.set_query(query);
    }

    pub fn pop_char(&mut self) {
        let mut query = self.query.clone();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    fn total_pages(&self, records: &[UserRecord]) -> usize {
        query::total_pages(query::filter(records, &self.query).len(), self.page_size)
    }

    /// Jump to `page`, clamped to the pages available for `records`.
    pub fn set_page(&mut self, page: usize, records: &[UserRecord]) {
        self.page = page.clamp(1, self.total_pages(records));
    }

    pub fn next_page(&mut self, records: &[UserRecord]) -> bool {
        let before = self.page;
        self.set_page(self.page.saturating_add(1), records);
        self.page != before
    }

    pub fn prev_page(&mut self, records: &[UserRecord]) -> bool {
        let before = self.page;
        self.set_page(self.page.saturating_sub(1), records);
        self.page != before
    }

    /// Clamp the page after the record set changed underneath it.
    pub fn reconcile(&mut self, records: &[UserRecord]) {
        let total = self.total_pages(records);
        if self.page > total {
            tracing::debug!(
                event = "core.view_state.page_clamped",
                from = self.page,
                to = total
            );
            self.page = total;
        }
    }

    pub fn derive<'a>(&self, records: &'a [UserRecord]) -> PageView<'a> {
        query::derive(records, &self.query, self.page, self.page_size)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}
