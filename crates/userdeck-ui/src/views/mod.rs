//! View components for userdeck-ui.
//!
//! - `main_view` - Root view: error banner, sidebar shell and page routing
//! - `sidebar` - Brand header, collapse toggle and navigation items
//! - `landing` - Landing page with the feature cards
//! - `dashboard` - Overview with hero, stats and feature cards
//! - `user_list` - Search, user cards and pagination
//! - `user_detail` - One user's profile, address, company and quick actions
//! - `placeholder_page` - Search and Settings panels

pub mod dashboard;
pub mod landing;
pub mod main_view;
pub mod placeholder_page;
pub mod sidebar;
pub mod user_detail;
pub mod user_list;

pub use main_view::MainView;
