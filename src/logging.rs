use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "FOLIO_LOG";

pub const DEFAULT_LEVEL: &str = "info";

/// Directive appended to a configured level unless it already names rmcp.
/// Keeps the transport's per-connection chatter off stderr.
const TRANSPORT_DIRECTIVE: &str = "rmcp=warn";

/// Install the global subscriber. Logs go to stderr; stdout is the protocol
/// channel. `FOLIO_LOG` is taken verbatim. Calling this twice is a no-op.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(directives(level)))
        .unwrap_or_else(|_| EnvFilter::new(directives(DEFAULT_LEVEL)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn directives(level: &str) -> String {
    if level.contains("rmcp") {
        level.to_string()
    } else {
        format!("{level},{TRANSPORT_DIRECTIVE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_quiets_transport() {
        assert_eq!(directives("info"), "info,rmcp=warn");
        assert_eq!(directives("debug"), "debug,rmcp=warn");
        assert!(EnvFilter::try_new(directives(DEFAULT_LEVEL)).is_ok());
    }

    #[test]
    fn explicit_rmcp_directive_is_kept() {
        assert_eq!(directives("info,rmcp=debug"), "info,rmcp=debug");
    }
}
