//! Anthropic Messages API client.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::generate::{parse_cards, user_prompt, CardGenerator, GenerateOptions, SYSTEM_PROMPT};
use crate::model::Flashcard;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Blocking client for the Anthropic Messages API.
///
/// One request per chunk; the pipeline issues them sequentially.
pub struct AnthropicClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    /// Create a client from an API key and generation options.
    pub fn new(api_key: impl Into<String>, options: &GenerateOptions) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: api_key.into(),
            model: options.model.clone(),
            max_tokens: options.max_tokens,
        }
    }

    fn complete(&self, prompt: String) -> Result<String> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system: SYSTEM_PROMPT.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .map_err(|e| Error::Api(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Api(format!("{}: {}", status, body)));
        }

        let parsed: MessagesResponse = response
            .json()
            .map_err(|e| Error::Api(format!("unreadable response body: {}", e)))?;

        Ok(parsed
            .content
            .into_iter()
            .map(|block| block.text)
            .collect::<Vec<_>>()
            .join(""))
    }
}

impl CardGenerator for AnthropicClient {
    fn generate(&self, title: &str, text: &str, limit: Option<usize>) -> Result<Vec<Flashcard>> {
        let prompt = user_prompt(title, text, limit);
        log::debug!(
            "requesting cards for {:?} ({} chars)",
            title,
            text.chars().count()
        );
        let response = self.complete(prompt)?;
        parse_cards(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = MessagesRequest {
            model: "claude-sonnet-4-5".into(),
            max_tokens: 4096,
            system: "system".into(),
            messages: vec![Message {
                role: "user".into(),
                content: "hello".into(),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-sonnet-4-5");
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{"content": [{"type": "text", "text": "[]"}], "usage": {"input_tokens": 1}}"#;
        let parsed: MessagesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.content[0].text, "[]");
    }
}
