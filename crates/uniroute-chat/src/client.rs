//! HTTP transport for the UniRoute chat endpoint

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use tracing::{debug, info};
use uniroute_config::{ChatConfig, Credential, Endpoint};

use crate::error::{ChatError, Result};
use crate::request::ChatRequest;
use crate::response::ChatResponse;

/// Sends a single chat request. One call, one connection, no retries.
pub struct ChatClient {
    client: Client,
    credential: Credential,
    endpoint: Endpoint,
}

impl ChatClient {
    pub fn new(config: &ChatConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ChatError::transport(&e))?;

        Ok(Self {
            client,
            credential: config.credential.clone(),
            endpoint: config.endpoint.clone(),
        })
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&self.credential.bearer()).map_err(|e| {
            ChatError::Transport {
                message: format!("invalid credential: {}", e),
                connection: false,
            }
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("uniroute-chat/", env!("CARGO_PKG_VERSION"))),
        );

        Ok(headers)
    }

    /// POST `{endpoint}/v1/chat` and decode the reply.
    ///
    /// Non-2xx replies become [`ChatError::Status`]; a 2xx body that is not
    /// a chat response becomes [`ChatError::Decode`]. Both keep the raw body.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = self.endpoint.chat_url();
        info!(model = %request.model, "POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.build_headers()?)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::transport(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ChatError::transport(&e))?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<ChatResponse>(&body) {
            Ok(chat_response) => Ok(chat_response),
            Err(source) => Err(ChatError::Decode { source, body }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: &str) -> ChatConfig {
        ChatConfig {
            credential: Credential::new(key),
            endpoint: Endpoint::default(),
            timeout_seconds: 30,
        }
    }

    #[test]
    fn test_build_headers() {
        let client = ChatClient::new(&config("ur_test_token")).unwrap();
        let headers = client.build_headers().unwrap();

        assert_eq!(headers[AUTHORIZATION], "Bearer ur_test_token");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_invalid_credential_header() {
        let client = ChatClient::new(&config("bad\nkey")).unwrap();
        let err = client.build_headers().unwrap_err();
        assert!(err.is_transport());
        assert!(!err.is_connection());
    }
}
