//! A blocking client for an OpenAI-compatible `chat/completions` endpoint.
//!
//! Request and response schemas follow the [OpenAI chat completions docs](https://platform.openai.com/docs/api-reference/chat/create),
//! which Moonshot implements as well. Only `choices[0].message.content` is read back.

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::errors::{truncate, ChatError};

/// Author of a `messages` item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A `chat/completions` `messages` item
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

/// A `chat/completions` request body
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
    pub temperature: f64,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

impl<'a> ChatRequest<'a> {
    /// One system message followed by one user message.
    pub fn new(config: &'a ClientConfig, system_prompt: &'a str, user_prompt: &'a str) -> Self {
        ChatRequest {
            model: &config.model,
            messages: [
                ChatMessage {
                    role: Role::System,
                    content: system_prompt,
                },
                ChatMessage {
                    role: Role::User,
                    content: user_prompt,
                },
            ],
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
        }
    }
}

#[derive(Deserialize)]
pub struct ChatResponseMessage {
    pub content: String,
}

#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

/// A `chat/completions` response, trimmed to the fields we read
#[derive(Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// Sends single-shot completion requests with a fixed timeout.
pub struct ChatClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl ChatClient {
    pub fn new(config: ClientConfig) -> Result<Self, ChatError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(ChatClient { http, config })
    }

    /// Ask the model once and return the first choice's text.
    ///
    /// Every failure (transport, timeout, non-2xx status, unexpected body) is
    /// reported as [`ChatError::RequestFailure`]. Nothing is retried.
    pub fn complete(&self, user_prompt: &str, system_prompt: &str) -> Result<String, ChatError> {
        let url = self.config.completions_url();
        let req_body = ChatRequest::new(&self.config, system_prompt, user_prompt);
        debug!(
            "POST {} model={} input_chars={}",
            url,
            self.config.model,
            user_prompt.chars().count()
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&req_body)
            .send()
            .map_err(|e| {
                error!("network error talking to {}: {}", url, e);
                ChatError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            error!("upstream returned {}: {}", status, truncate(&body));
            return Err(ChatError::RequestFailure(format!(
                "upstream returned {}: {}",
                status,
                truncate(&body)
            )));
        }

        let body = response.text()?;
        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            error!("failed to deserialize upstream response: {}", e);
            ChatError::RequestFailure(format!("unexpected response body: {}", e))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                error!("missing choices[0].message.content in upstream response");
                ChatError::RequestFailure(
                    "missing `choices[0].message.content` in upstream response".into(),
                )
            })
    }
}
