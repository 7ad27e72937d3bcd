//! Configuration type definitions for userdeck.
//!
//! These types are deserialized from TOML config files. Every field is
//! optional so that a project config only overrides what it sets; the
//! effective values come from the accessor methods in [`super::defaults`].
//!
//! # Example Configuration
//!
//! ```toml
//! [users]
//! page_size = 6
//!
//! [shell]
//! breakpoint = 768.0
//!
//! [source]
//! path = "users.json"
//! latency_ms = 400
//!
//! [effects]
//! enabled = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration derived from the environment, not from config files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for user-level userdeck files (default: ~/.userdeck)
    pub userdeck_dir: PathBuf,
}

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.userdeck/config.toml`
/// 2. Project config: `./.userdeck/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UserdeckConfig {
    /// Users list settings
    #[serde(default)]
    pub users: UsersConfig,

    /// Sidebar shell settings
    #[serde(default)]
    pub shell: ShellConfig,

    /// Record source selection
    #[serde(default)]
    pub source: SourceConfig,

    /// Entrance and hover transitions
    #[serde(default)]
    pub effects: EffectsConfig,
}

/// Users list configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UsersConfig {
    /// Number of records per page.
    /// Default: 6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

/// Shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShellConfig {
    /// Viewport width (logical pixels) below which the layout is narrow.
    /// Default: 768.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoint: Option<f32>,
}

/// Record source configuration.
///
/// With no `path`, the built-in placeholder users are served.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SourceConfig {
    /// JSON file containing an array of user records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Simulated latency before the placeholder source reports ready.
    /// Default: 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Transition configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EffectsConfig {
    /// Whether entrance/hover transitions run. Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
