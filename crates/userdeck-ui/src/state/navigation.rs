use userdeck_core::shell::{NavItem, Route, RouteError, active_nav_item};

/// Most pages kept for `back`; older entries are dropped first.
const MAX_HISTORY: usize = 32;

/// Current page and the pages visited before it.
#[derive(Clone, Debug)]
pub struct Navigation {
    current: Route,
    history: Vec<Route>,
}

impl Navigation {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Go to `route`. Returns false if it is already the current page.
    ///
    /// Revisiting a page already in the history unwinds back to it, so
    /// the history never holds a route twice.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        tracing::info!(
            event = "ui.navigation.route_changed",
            from = %self.current,
            to = %route
        );
        match self.history.iter().position(|visited| *visited == route) {
            Some(index) => self.history.truncate(index),
            None => {
                self.history.push(self.current);
                if self.history.len() > MAX_HISTORY {
                    self.history.remove(0);
                }
            }
        }
        self.current = route;
        true
    }

    pub fn navigate_path(&mut self, path: &str) -> Result<bool, RouteError> {
        let route = Route::parse(path)?;
        Ok(self.navigate(route))
    }

    /// Return to the previous page, if any.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::info!(
                    event = "ui.navigation.back",
                    from = %self.current,
                    to = %previous
                );
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn active_item(&self) -> Option<&'static NavItem> {
        active_nav_item(&self.current)
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(Route::Landing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdeck_core::users::UserId;

    #[test]
    fn test_navigate_and_back() {
        let mut nav = Navigation::default();
        assert!(nav.navigate(Route::Dashboard));
        assert!(nav.navigate(Route::UserDetail(UserId(4))));
        assert_eq!(nav.active_item().map(|i| i.label), Some("Users"));

        assert!(nav.back());
        assert_eq!(nav.current(), Route::Dashboard);
        assert!(nav.back());
        assert_eq!(nav.current(), Route::Landing);
        assert!(!nav.back());
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut nav = Navigation::new(Route::Users);
        assert!(!nav.navigate(Route::Users));
        assert!(!nav.back());
    }

    #[test]
    fn test_revisit_unwinds_history() {
        let mut nav = Navigation::default();
        nav.navigate(Route::Dashboard);
        nav.navigate(Route::Users);
        nav.navigate(Route::Dashboard);
        assert_eq!(nav.history, vec![Route::Landing]);

        for _ in 0..3 {
            nav.navigate(Route::Users);
            nav.navigate(Route::Dashboard);
        }
        assert_eq!(nav.history, vec![Route::Landing]);
        assert!(nav.back());
        assert_eq!(nav.current(), Route::Landing);
        assert!(!nav.back());
    }

    #[test]
    fn test_history_is_capped() {
        let mut nav = Navigation::default();
        for id in 1..=100 {
            nav.navigate(Route::UserDetail(UserId(id)));
        }
        assert_eq!(nav.history.len(), MAX_HISTORY);
        assert_eq!(nav.history.last(), Some(&Route::UserDetail(UserId(99))));
        assert!(!nav.history.contains(&Route::Landing));
    }

    #[test]
    fn test_navigate_path() {
        let mut nav = Navigation::default();
        assert_eq!(nav.navigate_path("/dashboard/settings/"), Ok(true));
        assert_eq!(nav.current(), Route::Settings);
        assert!(nav.navigate_path("/nope").is_err());
        assert_eq!(nav.current(), Route::Settings);
    }
}
