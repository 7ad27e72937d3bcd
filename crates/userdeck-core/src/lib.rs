//! userdeck-core: Core library for the userdeck user directory
//!
//! Everything the dashboard does that does not touch a window lives here:
//! the record model and record sources, search and pagination, detail
//! lookup, shell state and routes, dashboard figures, transitions,
//! configuration and logging. The UI crate renders on top of it.
//!
//! # Main Entry Points
//!
//! - [`users`] - Records, sources, filter/paginate, detail lookup, list view state
//! - [`shell`] - Sidebar state and page routes
//! - [`stats`] - Dashboard overview figures
//! - [`effects`] - Entrance, hover and ambient transitions
//! - [`config`] - Configuration management

pub mod config;
pub mod effects;
pub mod errors;
pub mod events;
pub mod logging;
pub mod shell;
pub mod stats;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use config::UserdeckConfig;
pub use effects::{EffectRunner, Lifecycle, Transition, VisualProps};
pub use errors::{ConfigError, UserdeckError, UserdeckResult};
pub use shell::{Route, RouteError, ShellState};
pub use stats::DashboardStats;
pub use users::{
    DetailState, ListSnapshot, PageView, RecordSource, SourceError, UserError, UserId, UserRecord,
    UserSnapshot, ViewState,
};

// Re-export logging initialization
pub use logging::init_logging;
