use thiserror::Error;

/// Failure to obtain or interpret a chat reply.
#[derive(Error, Debug)]
pub enum ChatError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("{message}")]
    Transport { message: String, connection: bool },

    /// Server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status { status: u16, body: String },

    /// 2xx reply whose body is not the expected JSON.
    #[error("{source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl ChatError {
    pub fn transport(err: &reqwest::Error) -> Self {
        let message = error_chain(err);
        let connection = err.is_connect() || message.to_lowercase().contains("connect");
        Self::Transport {
            message,
            connection,
        }
    }

    /// Transport and status failures share the same report.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. })
    }

    /// Whether the failure looks like the server is not reachable at all.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Transport { connection: true, .. })
    }

    /// Raw response body, when one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::Decode { body, .. } => Some(body),
            Self::Transport { .. } => None,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::Transport { .. } | Self::Status { .. } => "transport",
            Self::Decode { .. } => "decode",
        }
    }
}

/// reqwest hides the useful part ("Connection refused") in the source chain.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_transport() {
        let err = ChatError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert!(err.is_transport());
        assert!(!err.is_connection());
        assert_eq!(err.category(), "transport");
        assert_eq!(err.body(), Some("bad gateway"));
        assert_eq!(err.to_string(), "server returned status 502");
    }

    #[test]
    fn test_decode_keeps_body() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ChatError::Decode {
            source,
            body: "not json".to_string(),
        };
        assert!(!err.is_transport());
        assert_eq!(err.category(), "decode");
        assert_eq!(err.body(), Some("not json"));
        assert!(err.to_string().contains("expected"));
    }

    #[test]
    fn test_error_chain_dedups() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection refused");
        assert_eq!(error_chain(&inner), "Connection refused");
    }
}
