use serde::{Deserialize, Deserializer};

/// Reply from `POST /v1/chat`.
///
/// Only the fields the client renders are modelled; anything else the
/// router adds (`id`, `model`, `provider`, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Content of the first choice, if there is one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Choice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Token accounting. Missing counters read as zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Usage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub prompt_tokens: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completion_tokens: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_tokens: u64,
}

impl Usage {
    pub fn summary(&self) -> String {
        format!(
            "{} prompt + {} completion = {} total",
            self.prompt_tokens, self.completion_tokens, self.total_tokens
        )
    }
}

/// `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_response() {
        let body = r#"{"choices":[{"message":{"content":"Hi"}}],"usage":{"prompt_tokens":5,"completion_tokens":3,"total_tokens":8}}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.first_content(), Some("Hi"));
        assert_eq!(
            response.usage.unwrap().summary(),
            "5 prompt + 3 completion = 8 total"
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{}],"usage":{"total_tokens":4}}"#).unwrap();
        assert_eq!(response.first_content(), Some(""));

        let usage = response.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 0);
        assert_eq!(usage.completion_tokens, 0);
        assert_eq!(usage.summary(), "0 prompt + 0 completion = 4 total");
    }

    #[test]
    fn test_empty_object() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(response.choices.is_empty());
        assert!(response.usage.is_none());
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = r#"{"id":"chat-1","model":"gpt-4","provider":"openai","choices":[{"index":0,"finish_reason":"stop","message":{"role":"assistant","content":"ok"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.role.as_deref(), Some("assistant"));
        assert_eq!(response.first_content(), Some("ok"));
    }

    #[test]
    fn test_null_content() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(response.first_content(), Some(""));
    }

    #[test]
    fn test_null_message_reads_as_empty() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":null}]}"#).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.first_content(), Some(""));
    }

    #[test]
    fn test_null_choices_and_counters() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":null,"usage":{"prompt_tokens":null,"completion_tokens":2,"total_tokens":2}}"#,
        )
        .unwrap();
        assert!(response.choices.is_empty());
        assert_eq!(
            response.usage.unwrap().summary(),
            "0 prompt + 2 completion = 2 total"
        );
    }
}
