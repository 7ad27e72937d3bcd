use crate::config::types::UserdeckConfig;
use crate::errors::ConfigError;

/// Upper bound for the simulated source latency.
pub const MAX_LATENCY_MS: u64 = 60_000;

/// Validate a merged configuration.
pub fn validate_config(config: &UserdeckConfig) -> Result<(), ConfigError> {
    if config.users.page_size == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "users.page_size must be at least 1".to_string(),
        });
    }

    if let Some(breakpoint) = config.shell.breakpoint
        && !(breakpoint.is_finite() && breakpoint > 0.0)
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("shell.breakpoint must be a positive width, got {breakpoint}"),
        });
    }

    if let Some(latency) = config.source.latency_ms
        && latency > MAX_LATENCY_MS
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("source.latency_ms must be at most {MAX_LATENCY_MS}, got {latency}"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> UserdeckConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&UserdeckConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = validate_config(&parse("[users]\npage_size = 0\n")).unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn test_non_positive_breakpoint_rejected() {
        assert!(validate_config(&parse("[shell]\nbreakpoint = 0.0\n")).is_err());
        assert!(validate_config(&parse("[shell]\nbreakpoint = -10.0\n")).is_err());
        assert!(validate_config(&parse("[shell]\nbreakpoint = 640.0\n")).is_ok());
    }

    #[test]
    fn test_latency_bound() {
        assert!(validate_config(&parse("[source]\nlatency_ms = 60000\n")).is_ok());
        assert!(validate_config(&parse("[source]\nlatency_ms = 60001\n")).is_err());
    }
}
