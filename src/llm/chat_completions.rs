// OpenAI-compatible chat completions client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ChatMessage, LlmClient};
use crate::config::LlmConfig;
use crate::error::{ResearchError, Result};

/// Client for `POST {base_url}/chat/completions`
pub struct ChatCompletionsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionsClient {
    /// Create a client sharing the given HTTP connection pool
    pub fn new(http: reqwest::Client, api_key: String, config: &LlmConfig) -> Self {
        Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for ChatCompletionsClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let body = CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        log::debug!(
            "[llm] Sending {} message(s) to {} ({})",
            messages.len(),
            self.model,
            self.endpoint()
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ResearchError::Llm(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ResearchError::Llm(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        let data: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ResearchError::Llm(format!("Failed to parse response: {}", e)))?;

        extract_content(data)
    }
}

fn extract_content(data: CompletionResponse) -> Result<String> {
    data.choices
        .into_iter()
        .next()
        .map(|c| c.message.content.unwrap_or_default())
        .ok_or_else(|| ResearchError::Llm("Response contained no choices".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ChatCompletionsClient {
        let config = LlmConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        };
        ChatCompletionsClient::new(reqwest::Client::new(), "key".to_string(), &config)
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            client("https://api.together.xyz/v1/").endpoint(),
            "https://api.together.xyz/v1/chat/completions"
        );
        assert_eq!(
            client("https://api.together.xyz/v1").endpoint(),
            "https://api.together.xyz/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("hello")];
        let body = CompletionRequest {
            model: "m",
            messages: &messages,
            temperature: 0.1,
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "m");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
        assert!((json["temperature"].as_f64().unwrap() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_extract_content_first_choice() {
        let data: CompletionResponse = serde_json::from_str(
            r#"{"id": "x", "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Paris."}},
                {"index": 1, "message": {"role": "assistant", "content": "Lyon."}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(data).unwrap(), "Paris.");
    }

    #[test]
    fn test_extract_content_no_choices_is_error() {
        let data: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(extract_content(data), Err(ResearchError::Llm(_))));
    }

    #[test]
    fn test_extract_content_null_content_is_empty() {
        let data: CompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert_eq!(extract_content(data).unwrap(), "");
    }
}
