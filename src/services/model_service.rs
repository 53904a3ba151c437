//! Completion client for the Groq OpenAI-compatible chat endpoint.
//!
//! One awaited request per call, no retry, no streaming. The API key is
//! never logged; neither are prompt or completion contents, only sizes,
//! latency and token usage.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Single-shot text completion: prompt in, completion text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

pub struct GroqModelService {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GroqModelService {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionModel for GroqModelService {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessageReq {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let start = Instant::now();
        let response = self
            .client
            .post(&url)
            .header(USER_AGENT, "lesson-planner/0.1")
            .header(CONTENT_TYPE, "application/json")
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::GenerationError(format!("Completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = extract_api_error(&body).unwrap_or(body);
            return Err(AppError::GenerationError(format!(
                "Completion endpoint returned HTTP {}: {}",
                status, message
            )));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::GenerationError(format!("Malformed completion response: {}", e))
        })?;

        if let Some(usage) = &body.usage {
            log::info!(
                "completion usage: prompt={:?} completion={:?} total={:?}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        let text = body
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        log::info!(
            "model {} answered {} chars in {:?}",
            self.model,
            text.len(),
            start.elapsed()
        );

        if text.is_empty() {
            return Err(AppError::GenerationError(
                "model returned an empty completion".to_string(),
            ));
        }

        Ok(text)
    }
}

// --- Chat DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessageReq>,
}

#[derive(Serialize)]
struct ChatMessageReq {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResp,
}

#[derive(Deserialize)]
struct ChatMessageResp {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: Option<u32>,
    #[serde(default)]
    completion_tokens: Option<u32>,
    #[serde(default)]
    total_tokens: Option<u32>,
}

/// Pulls the human-readable message out of an OpenAI-format error body.
fn extract_api_error(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorWrapper {
        error: ErrorObject,
    }
    #[derive(Deserialize)]
    struct ErrorObject {
        message: String,
    }
    serde_json::from_str::<ErrorWrapper>(body)
        .ok()
        .map(|wrapper| wrapper.error.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_openai_shape() {
        let request = ChatCompletionRequest {
            model: "openai/gpt-oss-20b".to_string(),
            messages: vec![ChatMessageReq {
                role: "user".to_string(),
                content: "Say hi".to_string(),
            }],
        };

        let value = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(value["model"], "openai/gpt-oss-20b");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Say hi");
    }

    #[test]
    fn test_response_with_content_deserializes() {
        let body = r##"{
            "choices": [{"message": {"role": "assistant", "content": "# Plan"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
        }"##;

        let response: ChatCompletionResponse =
            serde_json::from_str(body).expect("response should deserialize");
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("# Plan")
        );
        assert_eq!(
            response.usage.expect("usage present").total_tokens,
            Some(30)
        );
    }

    #[test]
    fn test_response_without_usage_deserializes() {
        let body = r#"{"choices": [{"message": {"content": null}}]}"#;
        let response: ChatCompletionResponse =
            serde_json::from_str(body).expect("response should deserialize");
        assert!(response.choices[0].message.content.is_none());
        assert!(response.usage.is_none());
    }

    #[test]
    fn test_extract_api_error_reads_openai_error_body() {
        let body = r#"{"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}"#;
        assert_eq!(
            extract_api_error(body).as_deref(),
            Some("Invalid API Key")
        );
    }

    #[test]
    fn test_extract_api_error_passes_on_unknown_bodies() {
        assert!(extract_api_error("gateway timeout").is_none());
    }

    #[test]
    fn test_service_builds_from_config() {
        let service = GroqModelService::new(&Config::test_config()).expect("client should build");
        assert_eq!(service.base_url, crate::config::DEFAULT_API_BASE);
        assert_eq!(service.model, crate::config::DEFAULT_MODEL);
    }
}
