use serde::Serialize;

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_PROMPT: &str = "Hello! Explain what UniRoute is in one sentence.";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// Body of `POST /v1/chat`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatRequest {
    /// The fixed request this client sends: one user turn asking about UniRoute.
    pub fn build() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![Message::user(DEFAULT_PROMPT)],
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}
