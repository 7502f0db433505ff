//! 结构化日志
//!
//! Diagnostics go to stderr so stdout only ever carries the chat report.

use std::io::IsTerminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uniroute_config::{LogLevel, LoggingConfig};

pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let (filter, rejected) = build_filter(config);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal());

    tracing_subscriber::registry().with(filter).with(layer).try_init()?;

    if let Some(directive) = rejected {
        tracing::warn!("Ignoring invalid log filter {:?}", directive);
    }

    Ok(())
}

/// Falls back to the default level when the directive does not parse.
fn build_filter(config: &LoggingConfig) -> (EnvFilter, Option<String>) {
    let directive = config.filter();
    match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, None),
        Err(_) => (
            EnvFilter::new(LogLevel::default().as_str()),
            Some(directive),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directive() {
        let config = LoggingConfig {
            level: LogLevel::Warn,
            directive: Some("uniroute_chat=debug,reqwest=info".to_string()),
        };
        let (filter, rejected) = build_filter(&config);
        assert!(rejected.is_none());
        assert!(filter.to_string().contains("uniroute_chat=debug"));
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        let config = LoggingConfig {
            level: LogLevel::Warn,
            directive: Some("uniroute_chat=loud".to_string()),
        };
        let (filter, rejected) = build_filter(&config);
        assert_eq!(rejected.as_deref(), Some("uniroute_chat=loud"));
        assert_eq!(filter.to_string(), "warn");
    }
}
