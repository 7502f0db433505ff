//! Environment-driven configuration for the UniRoute chat client.
//!
//! | Key | Required | Default |
//! |---|---|---|
//! | `UNIROUTE_API_KEY` | yes | none |
//! | `UNIROUTE_API_URL` | no | `http://localhost:8084` |
//! | `UNIROUTE_LOG` | no | `warn` |

pub mod config;

pub use config::{
    read_env, ChatConfig, ConfigError, ConfigResult, Credential, Endpoint, LogLevel, LoggingConfig,
    API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL, LOG_ENV, REQUEST_TIMEOUT_SECS,
};
