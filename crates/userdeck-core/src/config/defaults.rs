//! Default values for configuration types.
//!
//! Config files leave fields unset; these accessors resolve the effective
//! value so the rest of the crate never deals with `Option`s.

use crate::config::types::{Config, EffectsConfig, ShellConfig, SourceConfig, UsersConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Records per page on the users list.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Narrow-viewport breakpoint in logical pixels.
pub const DEFAULT_BREAKPOINT: f32 = 768.0;

impl Default for Config {
    fn default() -> Self {
        let userdeck_dir = match dirs::home_dir() {
            Some(home) => home.join(".userdeck"),
            None => {
                eprintln!(
                    "Warning: Could not find home directory. Set HOME environment variable. \
                    Using fallback directory."
                );
                std::env::temp_dir().join(".userdeck")
            }
        };

        Self { userdeck_dir }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_config_path(&self) -> PathBuf {
        self.userdeck_dir.join("config.toml")
    }
}

impl UsersConfig {
    /// Returns the page size, defaulting to 6.
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

impl ShellConfig {
    /// Returns the narrow-viewport breakpoint, defaulting to 768.
    pub fn breakpoint(&self) -> f32 {
        self.breakpoint.unwrap_or(DEFAULT_BREAKPOINT)
    }
}

impl SourceConfig {
    /// Returns the simulated source latency, defaulting to zero.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms.unwrap_or(0))
    }
}

impl EffectsConfig {
    /// Returns whether transitions are enabled, defaulting to true.
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::UserdeckConfig;

    #[test]
    fn test_config_default() {
        let config = Config::new();
        assert!(config.userdeck_dir.to_string_lossy().contains(".userdeck"));
        assert!(
            config
                .user_config_path()
                .to_string_lossy()
                .ends_with("config.toml")
        );
    }

    #[test]
    fn test_userdeck_config_defaults() {
        let config = UserdeckConfig::default();
        assert_eq!(config.users.page_size(), 6);
        assert_eq!(config.shell.breakpoint(), 768.0);
        assert_eq!(config.source.latency(), Duration::ZERO);
        assert!(config.source.path.is_none());
        assert!(config.effects.enabled());
    }

    #[test]
    fn test_explicit_values_preserved() {
        let config: UserdeckConfig = toml::from_str(
            r#"
[users]
page_size = 12

[effects]
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(config.users.page_size(), 12);
        assert!(!config.effects.enabled());
        // Unset sections still resolve to defaults
        assert_eq!(config.shell.breakpoint(), 768.0);
    }
}
