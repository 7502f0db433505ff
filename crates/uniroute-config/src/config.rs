use std::env::VarError;
use std::fmt;

use tracing::debug;

/// Bearer token used to authenticate against UniRoute.
pub const API_KEY_ENV: &str = "UNIROUTE_API_KEY";

/// Base URL of the UniRoute API.
pub const API_URL_ENV: &str = "UNIROUTE_API_URL";

/// Diagnostic log filter for stderr output.
pub const LOG_ENV: &str = "UNIROUTE_LOG";

/// Endpoint used when `UNIROUTE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8084";

/// 请求超时（秒）
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    pub credential: Credential,
    pub endpoint: Endpoint,
    pub timeout_seconds: u64,
}

impl ChatConfig {
    /// Resolve configuration from the process environment.
    ///
    /// A value that is set but not valid UTF-8 is rejected rather than
    /// treated as unset.
    pub fn from_env() -> ConfigResult<Self> {
        Self::try_from_lookup(read_env)
    }

    /// Resolve configuration through an arbitrary key lookup.
    ///
    /// The credential is mandatory; the endpoint falls back to
    /// [`DEFAULT_API_URL`] and never fails.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::try_from_lookup(|key| Ok(lookup(key)))
    }

    /// Like [`ChatConfig::from_lookup`], for lookups that can fail.
    pub fn try_from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> ConfigResult<Option<String>>,
    {
        let credential = lookup(API_KEY_ENV)?
            .filter(|value| !value.is_empty())
            .map(Credential::new)
            .ok_or(ConfigError::MissingCredential { key: API_KEY_ENV })?;

        let endpoint = match lookup(API_URL_ENV)?.filter(|value| !value.is_empty()) {
            Some(url) => Endpoint::new(url),
            None => {
                debug!("{} not set, using {}", API_URL_ENV, DEFAULT_API_URL);
                Endpoint::default()
            }
        };

        Ok(Self {
            credential,
            endpoint,
            timeout_seconds: REQUEST_TIMEOUT_SECS,
        })
    }
}

/// Read one variable; unset is `None`, non-UTF-8 is an error.
pub fn read_env(key: &str) -> ConfigResult<Option<String>> {
    env_value(key, std::env::var(key))
}

fn env_value(key: &str, value: Result<String, VarError>) -> ConfigResult<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::Validation(format!(
            "{} is not valid UTF-8",
            key
        ))),
    }
}

/// Opaque API key. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(3).collect();
        write!(f, "Credential({}***)", prefix)
    }
}

/// Base URL of the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a path onto the base URL without doubling the slash.
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn chat_url(&self) -> String {
        self.join("v1/chat")
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self(DEFAULT_API_URL.to_string())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 日志级别
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Warn
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> ConfigResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::Validation(format!("Invalid log level: {}", s))),
        }
    }
}

/// Logging 配置
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Full filter directive, e.g. `uniroute_chat=debug,reqwest=info`.
    pub directive: Option<String>,
}

impl LoggingConfig {
    /// A non-UTF-8 filter is ignored; logging falls back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| read_env(key).ok().flatten())
    }

    /// A bare level is taken as the level; anything else is kept as a
    /// filter directive.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(LOG_ENV).filter(|value| !value.trim().is_empty()) {
            Some(value) => match value.parse::<LogLevel>() {
                Ok(level) => Self {
                    level,
                    directive: None,
                },
                Err(_) => Self {
                    level: LogLevel::default(),
                    directive: Some(value),
                },
            },
            None => Self::default(),
        }
    }

    /// Filter string handed to the subscriber.
    pub fn filter(&self) -> String {
        self.directive
            .clone()
            .unwrap_or_else(|| self.level.as_str().to_string())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{key} environment variable is required")]
    MissingCredential { key: &'static str },

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
