//! Application state for userdeck-ui.
//!
//! Views read and mutate state only through [`AppState`].

mod app_state;
mod directory;
mod errors;
mod hover;
mod navigation;

pub use app_state::AppState;
pub use hover::{HoverKey, HoverPhase};
