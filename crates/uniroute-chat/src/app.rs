use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{error, info, warn};
use uniroute_config::{ChatConfig, ConfigError, ConfigResult};

use crate::client::ChatClient;
use crate::error::Result;
use crate::render;
use crate::request::ChatRequest;
use crate::response::ChatResponse;

/// Terminal state of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    MissingCredential,
    InvalidConfig,
    TransportFailed,
    DecodeFailed,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Rendered)
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}

/// Resolve, build, send, render. Every failure is reported to `out` here
/// and surfaces only as the returned [`Outcome`].
///
/// The `Err` side is reserved for failing to write to `out`.
pub async fn run<W: Write>(config: ConfigResult<ChatConfig>, out: &mut W) -> io::Result<Outcome> {
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            warn!("configuration rejected: {}", err);
            render::render_config_error(out, &err)?;
            return Ok(match err {
                ConfigError::MissingCredential { .. } => Outcome::MissingCredential,
                ConfigError::Validation(_) => Outcome::InvalidConfig,
            });
        }
    };
    info!(endpoint = %config.endpoint, credential = ?config.credential, "configuration resolved");

    let request = ChatRequest::build();

    let outcome = match execute(&config, &request).await {
        Ok(response) => {
            info!(choices = response.choices.len(), "chat completed");
            render::render_response(out, &response)?;
            Outcome::Rendered
        }
        Err(err) => {
            error!(category = err.category(), "chat request failed: {}", err);
            render::render_chat_error(out, &err)?;
            if err.is_transport() {
                Outcome::TransportFailed
            } else {
                Outcome::DecodeFailed
            }
        }
    };

    out.flush()?;
    Ok(outcome)
}

async fn execute(config: &ChatConfig, request: &ChatRequest) -> Result<ChatResponse> {
    ChatClient::new(config)?.chat(request).await
}
