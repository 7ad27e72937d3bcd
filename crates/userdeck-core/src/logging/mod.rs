use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
/// `RUST_LOG` directives are applied on top of the default directive.
pub fn init_logging(quiet: bool) {
    let mut filter = EnvFilter::from_default_env();
    match default_directive(quiet).parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("Warning: invalid default log directive: {}", e),
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}

/// Directive covering every `userdeck*` crate target.
fn default_directive(quiet: bool) -> &'static str {
    if quiet {
        "userdeck=error"
    } else {
        "userdeck=info"
    }
}

/// Whether quiet logging was requested through `USERDECK_LOG_QUIET`.
///
/// Accepts `1`, `true` and `yes` (case-insensitive).
pub fn quiet_from_env() -> bool {
    std::env::var("USERDECK_LOG_QUIET")
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_parses() {
        let quiet: tracing_subscriber::filter::Directive = default_directive(true).parse().unwrap();
        let normal: tracing_subscriber::filter::Directive =
            default_directive(false).parse().unwrap();
        assert_eq!(quiet.to_string(), "userdeck=error");
        assert_eq!(normal.to_string(), "userdeck=info");
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy("TRUE"));
        assert!(is_truthy(" yes "));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}
