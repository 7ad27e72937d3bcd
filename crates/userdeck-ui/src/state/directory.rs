use userdeck_core::stats::DashboardStats;
use userdeck_core::users::{
    DetailState, ListSnapshot, PageView, RecordSource, UserId, ViewState, resolve_detail,
};

/// The record source, its latest snapshot and the list view state.
///
/// The snapshot is cached so views never call into the source while
/// rendering. `poll` picks up source transitions such as a simulated
/// load finishing.
pub struct RecordDirectory {
    source: Box<dyn RecordSource>,
    snapshot: ListSnapshot,
    view: ViewState,
}

impl RecordDirectory {
    pub fn new(source: Box<dyn RecordSource>, page_size: usize) -> Self {
        let snapshot = source.list_users();
        Self {
            source,
            snapshot,
            view: ViewState::new(page_size),
        }
    }

    /// Re-read the source. Returns true if the snapshot changed.
    pub fn poll(&mut self) -> bool {
        let next = self.source.list_users();
        if next == self.snapshot {
            return false;
        }

        if self.snapshot.is_loading && !next.is_loading {
            tracing::info!(
                event = "ui.directory.load_completed",
                source = self.source.name(),
                count = next.data.len(),
                failed = next.error.is_some()
            );
        }
        self.snapshot = next;
        if !self.snapshot.is_loading {
            self.view.reconcile(&self.snapshot.data);
        }
        true
    }

    pub fn refresh(&mut self) {
        tracing::info!(event = "ui.directory.refresh_started", source = self.source.name());
        self.source.refresh();
        self.poll();
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.is_loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.snapshot.error.as_deref()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Drop the list view state, as when the users page unmounts.
    pub fn reset_view(&mut self) {
        self.view = ViewState::new(self.view.page_size());
        tracing::debug!(event = "ui.users.view_reset");
    }

    pub fn page_view(&self) -> PageView<'_> {
        self.view.derive(&self.snapshot.data)
    }

    pub fn detail(&self, id: UserId) -> DetailState<'_> {
        resolve_detail(&self.snapshot, id)
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_records(&self.snapshot.data)
    }

    pub fn push_query_char(&mut self, c: char) {
        self.view.push_char(c);
        self.log_query();
    }

    pub fn pop_query_char(&mut self) {
        self.view.pop_char();
        self.log_query();
    }

    pub fn clear_query(&mut self) {
        self.view.clear_query();
        self.log_query();
    }

    fn log_query(&self) {
        tracing::debug!(
            event = "ui.search.query_changed",
            query_len = self.view.query().len(),
            page = self.view.page()
        );
    }

    /// Returns true if the page changed.
    pub fn next_page(&mut self) -> bool {
        let changed = self.view.next_page(&self.snapshot.data);
        self.log_page(changed);
        changed
    }

    /// Returns true if the page changed.
    pub fn prev_page(&mut self) -> bool {
        let changed = self.view.prev_page(&self.snapshot.data);
        self.log_page(changed);
        changed
    }

    fn log_page(&self, changed: bool) {
        if changed {
            tracing::info!(event = "ui.users.page_changed", page = self.view.page());
        }
    }
}
