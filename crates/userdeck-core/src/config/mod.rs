//! # Configuration System
//!
//! Hierarchical TOML configuration for userdeck.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.userdeck/config.toml` (global user preferences)
//! 3. **Project config** - `./.userdeck/config.toml` (project-specific overrides)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use userdeck_core::config::UserdeckConfig;
//!
//! fn example() -> Result<(), userdeck_core::errors::ConfigError> {
//!     let config = UserdeckConfig::load_hierarchy()?;
//!     let page_size = config.users.page_size();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use defaults::{DEFAULT_BREAKPOINT, DEFAULT_PAGE_SIZE};
pub use types::{Config, EffectsConfig, ShellConfig, SourceConfig, UserdeckConfig, UsersConfig};
pub use validation::validate_config;

impl UserdeckConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }
}
