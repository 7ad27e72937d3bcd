use userdeck_core::effects::{EffectRunner, EffectTarget, Lifecycle, presets, runner_for};
use userdeck_core::shell::{NavItem, Route, RouteError, ShellState};
use userdeck_core::stats::DashboardStats;
use userdeck_core::users::{self, DetailState, PageView, RecordSource, UserId};
use userdeck_core::UserdeckConfig;

use super::directory::RecordDirectory;
use super::errors::BannerErrors;
use super::hover::{HoverKey, HoverPhase, HoverState};
use super::navigation::Navigation;

/// Main application state.
///
/// All fields are private - access state through the facade methods below.
pub struct AppState {
    directory: RecordDirectory,
    navigation: Navigation,
    shell: ShellState,
    hover: HoverState,
    errors: BannerErrors,
    effects: Box<dyn EffectRunner>,
    /// Last quick action performed on the detail page, e.g. "Email copied".
    notice: Option<String>,
}

impl AppState {
    /// Create state from loaded configuration and the initial viewport width.
    pub fn new(config: &UserdeckConfig, viewport_width: f32) -> Self {
        Self::with_source(config, users::source_from_config(config), viewport_width)
    }

    pub fn with_source(
        config: &UserdeckConfig,
        source: Box<dyn RecordSource>,
        viewport_width: f32,
    ) -> Self {
        let shell = ShellState::for_viewport(viewport_width, config.shell.breakpoint());
        tracing::debug!(
            event = "ui.shell.initialized",
            width = viewport_width,
            narrow = shell.is_narrow(),
            sidebar_expanded = shell.sidebar_expanded()
        );

        Self {
            directory: RecordDirectory::new(source, config.users.page_size()),
            navigation: Navigation::default(),
            shell,
            hover: HoverState::default(),
            errors: BannerErrors::new(),
            effects: runner_for(config.effects.enabled()),
            notice: None,
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn route(&self) -> Route {
        self.navigation.current()
    }

    pub fn active_nav_item(&self) -> Option<&'static NavItem> {
        self.navigation.active_item()
    }

    pub fn navigate(&mut self, route: Route) {
        let previous = self.route();
        if self.navigation.navigate(route) {
            self.on_page_mounted(previous);
        }
    }

    /// Navigate to a path such as `/dashboard/users/3`.
    pub fn open_path(&mut self, path: &str) -> Result<(), RouteError> {
        let previous = self.route();
        if self.navigation.navigate_path(path)? {
            self.on_page_mounted(previous);
        }
        Ok(())
    }

    pub fn go_back(&mut self) {
        let previous = self.route();
        if self.navigation.back() {
            self.on_page_mounted(previous);
        }
    }

    fn on_page_mounted(&mut self, previous: Route) {
        // Query and page live only as long as the users page
        if previous == Route::Users {
            self.directory.reset_view();
        }
        self.hover.clear();
        self.notice = None;
        self.run_mount_effects();
    }

    fn run_mount_effects(&self) {
        let list_len = self.directory.page_view().visible.len();
        for (target, transition) in crate::effects::mount_effects(self.route(), list_len) {
            self.effects.run(&target, Lifecycle::Mount, &transition);
        }
    }

    // =========================================================================
    // Shell
    // =========================================================================

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    pub fn toggle_sidebar(&mut self) {
        self.shell.toggle_sidebar();
        tracing::info!(
            event = "ui.shell.sidebar_toggled",
            expanded = self.shell.sidebar_expanded()
        );
    }

    /// Returns true if the layout changed.
    pub fn on_viewport_resize(&mut self, width: f32) -> bool {
        let changed = self.shell.on_resize(width);
        if changed {
            tracing::info!(
                event = "ui.shell.viewport_resized",
                width = width,
                narrow = self.shell.is_narrow(),
                sidebar_expanded = self.shell.sidebar_expanded()
            );
        }
        changed
    }

    // =========================================================================
    // Records
    // =========================================================================

    /// Pick up source changes. Returns true if anything visible changed.
    pub fn poll_source(&mut self) -> bool {
        let changed = self.directory.poll();
        if changed && self.route() == Route::Users && !self.directory.is_loading() {
            self.run_mount_effects();
        }
        changed
    }

    pub fn refresh_source(&mut self) {
        self.directory.refresh();
    }

    pub fn is_loading(&self) -> bool {
        self.directory.is_loading()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.directory.load_error()
    }

    pub fn page_view(&self) -> PageView<'_> {
        self.directory.page_view()
    }

    pub fn query(&self) -> &str {
        self.directory.view().query()
    }

    pub fn detail(&self, id: UserId) -> DetailState<'_> {
        self.directory.detail(id)
    }

    pub fn stats(&self) -> DashboardStats {
        self.directory.stats()
    }

    pub fn push_query_char(&mut self, c: char) {
        self.directory.push_query_char(c);
        self.hover.clear();
    }

    pub fn pop_query_char(&mut self) {
        self.directory.pop_query_char();
        self.hover.clear();
    }

    pub fn clear_query(&mut self) {
        self.directory.clear_query();
        self.hover.clear();
    }

    pub fn next_page(&mut self) {
        if self.directory.next_page() {
            self.hover.clear();
            self.run_mount_effects();
        }
    }

    pub fn prev_page(&mut self) {
        if self.directory.prev_page() {
            self.hover.clear();
            self.run_mount_effects();
        }
    }

    // =========================================================================
    // Effects and hover
    // =========================================================================

    pub fn effects_enabled(&self) -> bool {
        self.effects.enabled()
    }

    /// Returns true if a re-render is needed.
    pub fn set_hover(&mut self, key: HoverKey, hovered: bool) -> bool {
        if !self.hover.set(key, hovered) {
            return false;
        }
        let (lifecycle, transition) = if hovered {
            (Lifecycle::HoverEnter, presets::card_hover_enter())
        } else {
            (Lifecycle::HoverLeave, presets::card_hover_leave())
        };
        self.effects
            .run(&EffectTarget::new(key.0, key.1), lifecycle, &transition);
        true
    }

    pub fn hover_phase(&self, key: HoverKey) -> HoverPhase {
        self.hover.phase(key)
    }

    // =========================================================================
    // Banner errors and notices
    // =========================================================================

    pub fn push_error(&mut self, message: String) {
        self.errors.push(message);
    }

    pub fn banner_errors(&self) -> &[String] {
        self.errors.messages()
    }

    pub fn has_banner_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn dismiss_errors(&mut self) {
        self.errors.dismiss();
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    // =========================================================================
    // Test-only methods
    // =========================================================================

    #[cfg(test)]
    pub fn test_with_records(records: Vec<userdeck_core::UserRecord>, width: f32) -> Self {
        let config = UserdeckConfig::default();
        Self::with_source(
            &config,
            Box::new(userdeck_core::users::StaticSource::new(records)),
            width,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdeck_core::users::PlaceholderSource;

    fn placeholder_state(width: f32) -> AppState {
        AppState::with_source(
            &UserdeckConfig::default(),
            Box::new(PlaceholderSource::default()),
            width,
        )
    }

    #[test]
    fn test_initial_state() {
        let state = placeholder_state(1100.0);
        assert_eq!(state.route(), Route::Landing);
        assert!(state.shell().sidebar_expanded());
        assert!(!state.is_loading());
        assert_eq!(state.page_view().visible.len(), 6);
        assert!(state.effects_enabled());
    }

    #[test]
    fn test_narrow_start_collapses_sidebar() {
        let state = placeholder_state(600.0);
        assert!(state.shell().is_narrow());
        assert!(!state.shell().sidebar_expanded());
    }

    #[test]
    fn test_resize_and_toggle() {
        let mut state = placeholder_state(1100.0);
        assert!(state.on_viewport_resize(700.0));
        assert!(!state.shell().sidebar_expanded());
        state.toggle_sidebar();
        assert!(state.shell().sidebar_expanded());
        assert!(state.shell().sidebar_overlays());

        // Resizing while narrow collapses the overlay again
        assert!(state.on_viewport_resize(650.0));
        assert!(!state.shell().sidebar_expanded());
        assert!(!state.on_viewport_resize(640.0));
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = placeholder_state(1100.0);
        state.navigate(Route::Users);
        state.next_page();
        assert_eq!(state.page_view().page, 2);

        for c in "bret".chars() {
            state.push_query_char(c);
        }
        let view = state.page_view();
        assert_eq!(view.page, 1);
        assert_eq!(view.visible.len(), 1);
        assert_eq!(view.visible[0].name, "Leanne Graham");

        state.clear_query();
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_leaving_users_discards_query_and_page() {
        let mut state = placeholder_state(1100.0);
        state.navigate(Route::Users);
        state.next_page();
        state.push_query_char('e');
        assert_eq!(state.query(), "e");

        state.navigate(Route::Dashboard);
        state.navigate(Route::Users);
        assert_eq!(state.query(), "");
        assert_eq!(state.page_view().page, 1);

        state.next_page();
        assert_eq!(state.page_view().page, 2);
        state.navigate(Route::UserDetail(UserId(7)));
        state.go_back();
        assert_eq!(state.route(), Route::Users);
        assert_eq!(state.page_view().page, 1);
    }

    #[test]
    fn test_detail_navigation_and_back() {
        let mut state = placeholder_state(1100.0);
        state.navigate(Route::Users);
        state.navigate(Route::UserDetail(UserId(2)));
        assert_eq!(state.active_nav_item().map(|i| i.label), Some("Users"));
        assert!(matches!(
            state.detail(UserId(2)),
            DetailState::Ready(u) if u.username == "Antonette"
        ));

        state.set_notice("Email copied");
        state.go_back();
        assert_eq!(state.route(), Route::Users);
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn test_open_path() {
        let mut state = placeholder_state(1100.0);
        assert!(state.open_path("/dashboard/users/3").is_ok());
        assert_eq!(state.route(), Route::UserDetail(UserId(3)));

        let err = state.open_path("/dashboard/users/abc").unwrap_err();
        assert!(matches!(err, RouteError::InvalidUserId { .. }));
        assert_eq!(state.route(), Route::UserDetail(UserId(3)));
    }

    #[test]
    fn test_missing_user_is_not_found() {
        let state = AppState::test_with_records(Vec::new(), 1100.0);
        assert_eq!(state.detail(UserId(999)), DetailState::NotFound(UserId(999)));
    }

    #[test]
    fn test_hover_changes() {
        let mut state = placeholder_state(1100.0);
        assert!(state.set_hover(("user-card", 0), true));
        assert!(!state.set_hover(("user-card", 0), true));
        assert_eq!(state.hover_phase(("user-card", 0)), HoverPhase::Entered);
        assert!(state.set_hover(("user-card", 0), false));
        assert_eq!(state.hover_phase(("user-card", 0)), HoverPhase::Left);
    }

    #[test]
    fn test_banner_errors() {
        let mut state = placeholder_state(1100.0);
        state.push_error("Failed to parse config file: bad".to_string());
        assert!(state.has_banner_errors());
        state.dismiss_errors();
        assert!(state.banner_errors().is_empty());
    }
}
