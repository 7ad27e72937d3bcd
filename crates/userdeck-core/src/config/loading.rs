//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.userdeck/config.toml` (global user preferences)
//! 3. **Project config** - `./.userdeck/config.toml` (project-specific overrides)

use crate::config::types::{
    Config, EffectsConfig, ShellConfig, SourceConfig, UserdeckConfig, UsersConfig,
};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed,
/// or if the merged configuration fails validation. Missing files are not errors.
pub fn load_hierarchy() -> Result<UserdeckConfig, ConfigError> {
    let user_path = Config::new().user_config_path();
    let project_path = std::env::current_dir()?
        .join(".userdeck")
        .join("config.toml");
    load_hierarchy_from(&user_path, &project_path)
}

/// Load and merge the user and project config files at explicit paths.
pub fn load_hierarchy_from(
    user_path: &Path,
    project_path: &Path,
) -> Result<UserdeckConfig, ConfigError> {
    let mut config = UserdeckConfig::default();

    for path in [user_path, project_path] {
        match load_config_file(path) {
            Ok(file_config) => {
                tracing::debug!(
                    event = "core.config.file_loaded",
                    path = %path.display()
                );
                config = merge_configs(config, file_config);
            }
            Err(ConfigError::ConfigNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a single configuration file.
///
/// A relative `source.path` is resolved against the directory containing
/// the config file, so project configs can reference data next to them.
pub fn load_config_file(path: &Path) -> Result<UserdeckConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let mut config: UserdeckConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;

    if let (Some(source_path), Some(base)) = (config.source.path.as_ref(), path.parent())
        && source_path.is_relative()
    {
        config.source.path = Some(resolve_relative(base, source_path));
    }

    Ok(config)
}

fn resolve_relative(base: &Path, relative: &Path) -> PathBuf {
    base.join(relative)
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Each field is taken from the override only when it was set there.
pub fn merge_configs(base: UserdeckConfig, override_config: UserdeckConfig) -> UserdeckConfig {
    UserdeckConfig {
        users: UsersConfig {
            page_size: override_config.users.page_size.or(base.users.page_size),
        },
        shell: ShellConfig {
            breakpoint: override_config.shell.breakpoint.or(base.shell.breakpoint),
        },
        source: SourceConfig {
            path: override_config.source.path.or(base.source.path),
            latency_ms: override_config.source.latency_ms.or(base.source.latency_ms),
        },
        effects: EffectsConfig {
            enabled: override_config.effects.enabled.or(base.effects.enabled),
        },
    }
}
