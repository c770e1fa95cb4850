use crate::config::Config;
use crate::models::{ApiErrorBody, GenerateContentResponse};
use anyhow::{Context, Result, anyhow};
use serde_json::json;
use std::fmt;

pub struct LLMClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl fmt::Debug for LLMClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LLMClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

/// The instruction sent to the model for a post on `title`.
pub fn build_prompt(title: &str, details: &str) -> String {
    format!(
        "Write a complete blog post titled '{}' on this topic. \
         Start the response with the full blog post title on its own line. \
         The second line must be a short 1-sentence summary followed by a blank line. \
         Ensure paragraphs are separated by double newlines. \
         Include these specific details: {}",
        title, details
    )
}

impl LLMClient {
    pub fn new(config: &Config) -> Self {
        LLMClient {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }

    /// Asks the model for a post and returns its reply text untouched.
    pub async fn generate_post(&self, title: &str, details: &str) -> Result<String> {
        let prompt = build_prompt(title, details);
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "sending generation request");

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "contents": [
                    { "parts": [{ "text": prompt }] }
                ]
            }))
            .send()
            .await
            .context("request to the generative API failed")?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&response_text)
                .map(|body| body.error.message)
                .unwrap_or(response_text);
            return Err(anyhow!("generative API returned {}: {}", status, message));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&response_text)
            .context("generative API returned an unexpected response body")?;

        let text = parsed
            .text()
            .ok_or_else(|| anyhow!("generative API response contained no text"))?;
        tracing::info!(chars = text.len(), "received generated content");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn config_for(url: &str) -> Config {
        Config::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some("test-key".to_string()),
            "GEMINI_MODEL" => Some("test-model".to_string()),
            "GEMINI_API_URL" => Some(url.to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_prompt_mentions_title_and_details() {
        let prompt = build_prompt("Ownership in Rust", "mention lifetimes");
        assert!(prompt.starts_with("Write a complete blog post titled 'Ownership in Rust' on this topic. "));
        assert!(prompt.contains("Start the response with the full blog post title on its own line. "));
        assert!(prompt.contains("followed by a blank line. Ensure paragraphs"));
        assert!(prompt.ends_with("Include these specific details: mention lifetimes"));
    }

    #[test]
    fn test_prompt_with_empty_details() {
        assert!(build_prompt("T", "").ends_with("Include these specific details: "));
    }

    #[tokio::test]
    async fn test_generate_post_returns_candidate_text() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/test-model:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .match_body(Matcher::PartialJson(json!({
                "contents": [{ "parts": [{ "text": build_prompt("Rust", "fast") }] }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{ "content": { "parts": [{ "text": "Rust\nIt is fast.\n\nBody." }] } }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = LLMClient::new(&config_for(&server.url()));
        let text = client.generate_post("Rust", "fast").await.unwrap();

        assert_eq!(text, "Rust\nIt is fast.\n\nBody.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_post_reports_api_error_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/test-model:generateContent")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": { "code": 400, "message": "API key not valid" } }).to_string())
            .create_async()
            .await;

        let client = LLMClient::new(&config_for(&server.url()));
        let err = client.generate_post("Rust", "").await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("400"));
        assert!(message.contains("API key not valid"));
    }

    #[tokio::test]
    async fn test_generate_post_fails_without_text() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/test-model:generateContent")
            .with_status(200)
            .with_body(json!({ "candidates": [] }).to_string())
            .create_async()
            .await;

        let client = LLMClient::new(&config_for(&server.url()));
        assert!(client.generate_post("Rust", "").await.is_err());
    }

    #[tokio::test]
    async fn test_generate_post_fails_on_unreachable_host() {
        // Port 9 (discard) on localhost is not expected to accept connections.
        let client = LLMClient::new(&config_for("http://127.0.0.1:9"));
        assert!(client.generate_post("Rust", "").await.is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = LLMClient::new(&config_for("http://localhost"));
        assert!(!format!("{:?}", client).contains("test-key"));
    }
}
