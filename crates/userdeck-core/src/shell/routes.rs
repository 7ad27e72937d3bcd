use std::fmt;

use crate::shell::errors::RouteError;
use crate::users::types::UserId;

/// A page of the application, addressed by a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Dashboard,
    Users,
    UserDetail(UserId),
    Search,
    Settings,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Users => "/dashboard/users".to_string(),
            Route::UserDetail(id) => format!("/dashboard/users/{}", id),
            Route::Search => "/dashboard/search".to_string(),
            Route::Settings => "/dashboard/settings".to_string(),
        }
    }

    /// Parse a path. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        if !path.starts_with('/') {
            return Err(RouteError::UnknownPath {
                path: path.to_string(),
            });
        }

        match segments.as_slice() {
            [] => Ok(Route::Landing),
            ["dashboard"] => Ok(Route::Dashboard),
            ["dashboard", "users"] => Ok(Route::Users),
            ["dashboard", "users", id] => id
                .parse::<UserId>()
                .map(Route::UserDetail)
                .map_err(|_| RouteError::InvalidUserId {
                    path: path.to_string(),
                    value: id.to_string(),
                }),
            ["dashboard", "search"] => Ok(Route::Search),
            ["dashboard", "settings"] => Ok(Route::Settings),
            _ => Err(RouteError::UnknownPath {
                path: path.to_string(),
            }),
        }
    }

    /// Whether this route is rendered inside the sidebar shell.
    pub fn in_shell(&self) -> bool {
        !matches!(self, Route::Landing)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Welcome",
            Route::Dashboard => "Dashboard",
            Route::Users => "Users",
            Route::UserDetail(_) => "User Details",
            Route::Search => "Search",
            Route::Settings => "Settings",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        label: "Dashboard",
        icon: "⌂",
        route: Route::Dashboard,
    },
    NavItem {
        label: "Users",
        icon: "◉",
        route: Route::Users,
    },
    NavItem {
        label: "Search",
        icon: "⌕",
        route: Route::Search,
    },
    NavItem {
        label: "Settings",
        icon: "⚙",
        route: Route::Settings,
    },
];

fn is_path_prefix(prefix: &str, path: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// The nav item to highlight for `current`.
///
/// The item whose path is the longest segment-wise prefix of the current
/// path wins, so a user detail page highlights Users rather than Dashboard.
pub fn active_nav_item(current: &Route) -> Option<&'static NavItem> {
    let path = current.path();
    NAV_ITEMS
        .iter()
        .filter(|item| is_path_prefix(&item.route.path(), &path))
        .max_by_key(|item| item.route.path().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Ok(Route::Landing));
        assert_eq!(Route::parse("/dashboard"), Ok(Route::Dashboard));
        assert_eq!(Route::parse("/dashboard/users"), Ok(Route::Users));
        assert_eq!(
            Route::parse("/dashboard/users/7"),
            Ok(Route::UserDetail(UserId(7)))
        );
        assert_eq!(Route::parse("/dashboard/search"), Ok(Route::Search));
        assert_eq!(Route::parse("/dashboard/settings"), Ok(Route::Settings));
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(Route::parse("/dashboard/users/"), Ok(Route::Users));
        assert_eq!(Route::parse("//"), Ok(Route::Landing));
    }

    #[test]
    fn test_unknown_and_invalid_paths() {
        assert!(matches!(
            Route::parse("/admin"),
            Err(RouteError::UnknownPath { .. })
        ));
        assert!(matches!(
            Route::parse("dashboard"),
            Err(RouteError::UnknownPath { .. })
        ));
        assert!(matches!(
            Route::parse("/dashboard/users/3/edit"),
            Err(RouteError::UnknownPath { .. })
        ));
        assert_eq!(
            Route::parse("/dashboard/users/bob"),
            Err(RouteError::InvalidUserId {
                path: "/dashboard/users/bob".to_string(),
                value: "bob".to_string(),
            })
        );
    }

    #[test]
    fn test_path_parse_agree() {
        let routes = [
            Route::Landing,
            Route::Dashboard,
            Route::Users,
            Route::UserDetail(UserId(42)),
            Route::Search,
            Route::Settings,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Ok(route));
        }
    }

    #[test]
    fn test_active_nav_item_longest_prefix() {
        let label = |route: Route| active_nav_item(&route).map(|item| item.label);

        assert_eq!(label(Route::Dashboard), Some("Dashboard"));
        assert_eq!(label(Route::Users), Some("Users"));
        assert_eq!(label(Route::UserDetail(UserId(3))), Some("Users"));
        assert_eq!(label(Route::Search), Some("Search"));
        assert_eq!(label(Route::Settings), Some("Settings"));
        assert_eq!(label(Route::Landing), None);
    }

    #[test]
    fn test_prefix_respects_segments() {
        assert!(is_path_prefix("/dashboard", "/dashboard/users"));
        assert!(!is_path_prefix("/dashboard/user", "/dashboard/users"));
    }

    #[test]
    fn test_in_shell() {
        assert!(!Route::Landing.in_shell());
        assert!(Route::UserDetail(UserId(1)).in_shell());
    }
}
