//! Sidebar shell state and page routes.

pub mod errors;
pub mod routes;
pub mod state;

pub use errors::RouteError;
pub use routes::{NAV_ITEMS, NavItem, Route, active_nav_item};
pub use state::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_EXPANDED_WIDTH, ShellState};
