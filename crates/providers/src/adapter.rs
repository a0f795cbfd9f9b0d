use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::types::*;
use siaga_core::{Error, ProviderSettings, Result};

/// Generic provider trait for hosted completion backends
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    /// Request one full completion for the given transcript
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse>;
}

/// Groq provider (OpenAI-compatible chat completions API)
pub struct GroqProvider {
    client: HttpClient,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqProvider {
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        Self {
            client: HttpClient::new(),
            api_key,
            model,
            base_url: base_url.unwrap_or_else(|| "https://api.groq.com/openai/v1".to_string()),
        }
    }

    /// Convert ChatRequest to the wire format
    fn to_wire_request(&self, request: &ChatRequest) -> WireChatRequest {
        WireChatRequest {
            model: self.model.clone(),
            messages: request.messages.clone(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            top_p: request.top_p,
            stream: false,
        }
    }

    /// Map a non-success HTTP status to the matching error variant
    fn status_error(status: StatusCode, body: String) -> Error {
        match status {
            StatusCode::TOO_MANY_REQUESTS => Error::RateLimited(body),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Unauthorized(body),
            _ => Error::Provider(format!("API error: {} - {}", status, body)),
        }
    }
}

#[async_trait::async_trait]
impl Provider for GroqProvider {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse> {
        let wire_request = self.to_wire_request(&request);
        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %self.model, messages = request.messages.len(), "sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| Error::Provider(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, body));
        }

        let wire_response: WireChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("invalid completion response: {}", e)))?;

        let choice = wire_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Provider("completion response had no choices".to_string()))?;

        let mut chat_response = ChatResponse::new(ChatMessage::assistant(choice.message.content));
        if let Some(usage) = wire_response.usage {
            chat_response = chat_response.with_usage(Usage::new(usage.prompt_tokens, usage.completion_tokens));
        }
        if let Some(reason) = choice.finish_reason {
            chat_response = chat_response.with_finish_reason(reason);
        }

        Ok(chat_response)
    }
}

/// Wire request format (OpenAI-compatible)
#[derive(Debug, Serialize)]
struct WireChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    stream: bool,
}

/// Wire response format
#[derive(Debug, Deserialize)]
struct WireChatResponse {
    choices: Vec<WireChoice>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct WireMessage {
    #[serde(default)]
    role: Option<String>,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// Factory to create providers from config
pub struct ProviderFactory;

impl ProviderFactory {
    pub fn create_from_settings(settings: &ProviderSettings) -> Result<Arc<dyn Provider>> {
        let api_key = settings.resolved_api_key()?;
        Ok(Arc::new(GroqProvider::new(
            api_key,
            settings.model.clone(),
            Some(settings.base_url.clone()),
        )))
    }
}
