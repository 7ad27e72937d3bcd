//! Search and pagination over an in-memory record list.
//!
//! Everything here is a pure function of its inputs: the same records,
//! query, page and page size always produce the same [`PageView`].

use crate::users::types::UserRecord;

/// The visible slice of the filtered records for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// Records on the requested page, in source order.
    pub visible: Vec<&'a UserRecord>,
    /// `max(1, ceil(filtered_count / page_size))`.
    pub total_pages: usize,
    /// Number of records matching the query across all pages.
    pub filtered_count: usize,
    /// The page that was requested (not clamped).
    pub page: usize,
    /// Effective page size (a zero page size is treated as 1).
    pub page_size: usize,
}

/// Whether `record` matches a free-text query.
///
/// Case-insensitive substring match against display name, email or
/// username. An empty query matches every record.
pub fn matches(record: &UserRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    matches_lowercase(record, &needle)
}

fn matches_lowercase(record: &UserRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.email.to_lowercase().contains(needle)
        || record.username.to_lowercase().contains(needle)
}

/// Records matching `query`, in input order.
pub fn filter<'a>(records: &'a [UserRecord], query: &str) -> Vec<&'a UserRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_lowercase(record, &needle))
        .collect()
}

/// Number of pages needed for `count` items, never less than 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Filter `records` by `query` and cut out page `page` (1-based).
///
/// Out-of-range pages, including page 0, produce an empty `visible`
/// slice rather than an error.
pub fn derive<'a>(
    records: &'a [UserRecord],
    query: &str,
    page: usize,
    page_size: usize,
) -> PageView<'a> {
    let page_size = page_size.max(1);
    let filtered = filter(records, query);
    let filtered_count = filtered.len();

    let visible = match page.checked_sub(1) {
        Some(index) => filtered
            .into_iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .collect(),
        None => Vec::new(),
    };

    PageView {
        visible,
        total_pages: total_pages(filtered_count, page_size),
        filtered_count,
        page,
        page_size,
    }
}

impl PageView<'_> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Human-readable range, e.g. "Showing 1–6 of 7".
    pub fn range_label(&self) -> String {
        if self.visible.is_empty() {
            return format!("Showing 0 of {}", self.filtered_count);
        }
        let start = (self.page - 1) * self.page_size + 1;
        let end = start + self.visible.len() - 1;
        format!("Showing {}–{} of {}", start, end, self.filtered_count)
    }
}
