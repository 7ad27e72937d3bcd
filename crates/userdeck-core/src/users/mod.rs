//! User records, record sources, search and pagination.

pub mod errors;
pub mod json_file;
pub mod lookup;
pub mod placeholder;
pub mod query;
pub mod source;
pub mod types;
pub mod view_state;

pub use errors::{SourceError, UserError};
pub use json_file::JsonFileSource;
pub use lookup::{DetailState, find, resolve_detail, resolve_user_snapshot};
pub use placeholder::PlaceholderSource;
pub use query::{PageView, derive, filter, matches, total_pages};
pub use source::{ListSnapshot, RecordSource, StaticSource, UserSnapshot};
pub use types::{Address, Company, Geo, UserId, UserRecord};
pub use view_state::ViewState;

use crate::config::UserdeckConfig;

/// Build the record source selected by configuration.
///
/// A configured path selects the JSON file source; otherwise the bundled
/// placeholder users are served with the configured latency.
pub fn source_from_config(config: &UserdeckConfig) -> Box<dyn RecordSource> {
    match &config.source.path {
        Some(path) => Box::new(JsonFileSource::new(path.clone())),
        None => Box::new(PlaceholderSource::new(config.source.latency())),
    }
}
