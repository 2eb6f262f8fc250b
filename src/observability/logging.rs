//! # Structured Logging
//!
//! Log output goes to stderr; stdout is reserved for the MCP protocol stream.

use tracing_subscriber::EnvFilter;

use crate::config::{SoarConfig, ENV_SOAR_LOG_FORMAT};

/// Create the tracing span for one tool invocation.
///
/// ```rust,ignore
/// let span = tool_span!("misp_create_event");
/// let span = tool_span!("list_cases", page = "2");
/// ```
#[macro_export]
macro_rules! tool_span {
    ($tool:expr) => {
        tracing::info_span!(
            "tool_call",
            tool = %$tool,
            invocation_id = %uuid::Uuid::new_v4()
        )
    };
    ($tool:expr, $($field:tt)*) => {
        tracing::info_span!(
            "tool_call",
            tool = %$tool,
            invocation_id = %uuid::Uuid::new_v4(),
            $($field)*
        )
    };
}

/// Log output settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `debug` instead of `info` when `RUST_LOG` is unset
    pub verbose: bool,
    /// JSON lines instead of human-readable text
    pub json: bool,
}

impl LoggingConfig {
    /// Combine CLI flags with `SOAR_LOG_FORMAT`
    pub fn from_env(verbose: bool, json: bool) -> Self {
        let json_from_env = std::env::var(ENV_SOAR_LOG_FORMAT)
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        Self { verbose, json: json || json_from_env }
    }

    fn default_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    // Subscriber already set elsewhere (e.g. integration tests); ignore.
    let _ = if config.json { builder.json().try_init() } else { builder.try_init() };
}

/// Log configuration at startup
pub fn log_config_info(config: &SoarConfig) {
    tracing::info!(
        soar_url = %config.api_root(),
        app_key_configured = config.app_key.is_some(),
        timeout_seconds = config.timeout_seconds,
        "SOAR connection configuration"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros_compile() {
        let _span = tool_span!("misp_create_event");
        let _span = tool_span!("list_cases", page = "2");
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(LoggingConfig { verbose: true, json: false }.default_directive(), "debug");
        assert_eq!(LoggingConfig::default().default_directive(), "info");
    }

    #[test]
    fn test_json_flag_wins() {
        assert!(LoggingConfig::from_env(false, true).json);
    }
}
