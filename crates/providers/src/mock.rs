use crate::Provider;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use siaga_core::{Error, Result};

/// Mock response types for deterministic testing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MockResponse {
    Text { content: String },
    RateLimited { message: String },
    Unauthorized { message: String },
    Failure { message: String },
}

/// Mock configuration from TOML file
#[derive(Debug, Deserialize)]
struct MockConfig {
    responses: Vec<MockResponse>,
}

/// Mock provider for deterministic testing without API calls
pub struct MockProvider {
    responses: Vec<MockResponse>,
    current: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self { responses, current: Arc::new(AtomicUsize::new(0)) }
    }

    /// Convenience constructor: every call replies with the same text
    pub fn with_reply(content: impl Into<String>) -> Self {
        Self::new(vec![MockResponse::Text { content: content.into() }])
    }

    /// Load scripted responses from a TOML file
    pub fn from_file(path: &Path) -> Self {
        if !path.exists() {
            tracing::warn!("Mock responses file not found: {}", path.display());
            return Self::new(vec![MockResponse::Failure {
                message: format!("Mock responses file not found: {}", path.display()),
            }]);
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<MockConfig>(&content) {
                Ok(config) => Self::new(config.responses),
                Err(e) => {
                    tracing::error!("Failed to parse mock responses: {}", e);
                    Self::new(vec![MockResponse::Failure { message: format!("Failed to parse mock responses: {}", e) }])
                }
            },
            Err(e) => {
                tracing::error!("Failed to read mock responses file: {}", e);
                Self::new(vec![MockResponse::Failure {
                    message: format!("Failed to read mock responses file: {}", e),
                }])
            }
        }
    }

    fn next_response(&self) -> MockResponse {
        let index = self.current.fetch_add(1, Ordering::SeqCst);
        if index < self.responses.len() {
            self.responses[index].clone()
        } else {
            // Past the script, keep replaying the last entry.
            self.responses
                .last()
                .cloned()
                .unwrap_or(MockResponse::Failure { message: "no mock responses configured".to_string() })
        }
    }
}

#[async_trait::async_trait]
impl Provider for MockProvider {
    async fn complete(&self, _request: ChatRequest) -> Result<ChatResponse> {
        match self.next_response() {
            MockResponse::Text { content } => Ok(ChatResponse::new(ChatMessage::assistant(content))),
            MockResponse::RateLimited { message } => Err(Error::RateLimited(message)),
            MockResponse::Unauthorized { message } => Err(Error::Unauthorized(message)),
            MockResponse::Failure { message } => Err(Error::Provider(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_mock_provider_replies_in_order() {
        let provider = MockProvider::new(vec![
            MockResponse::Text { content: "pertama".to_string() },
            MockResponse::Text { content: "kedua".to_string() },
        ]);
        let request = ChatRequest::builder().add_message(ChatMessage::user("hi")).build();

        let first = provider.complete(request.clone()).await.unwrap();
        assert_eq!(first.message.content, "pertama");

        let second = provider.complete(request).await.unwrap();
        assert_eq!(second.message.content, "kedua");
    }

    #[tokio::test]
    async fn test_mock_provider_replays_last_entry() {
        let provider = MockProvider::with_reply("selalu sama");
        let request = ChatRequest::builder().add_message(ChatMessage::user("hi")).build();

        for _ in 0..3 {
            let response = provider.complete(request.clone()).await.unwrap();
            assert_eq!(response.message.content, "selalu sama");
        }
    }

    #[tokio::test]
    async fn test_mock_provider_error_variants() {
        let provider = MockProvider::new(vec![
            MockResponse::RateLimited { message: "429".to_string() },
            MockResponse::Unauthorized { message: "401".to_string() },
            MockResponse::Failure { message: "boom".to_string() },
        ]);
        let request = ChatRequest::builder().add_message(ChatMessage::user("hi")).build();

        assert!(matches!(provider.complete(request.clone()).await, Err(Error::RateLimited(_))));
        assert!(matches!(provider.complete(request.clone()).await, Err(Error::Unauthorized(_))));
        assert!(matches!(provider.complete(request).await, Err(Error::Provider(_))));
    }

    #[tokio::test]
    async fn test_mock_provider_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[responses]]
type = "text"
content = "dari file"
"#
        )
        .unwrap();

        let provider = MockProvider::from_file(file.path());
        let request = ChatRequest::builder().add_message(ChatMessage::user("hi")).build();
        let response = provider.complete(request).await.unwrap();
        assert_eq!(response.message.content, "dari file");
    }

    #[tokio::test]
    async fn test_mock_provider_missing_file() {
        let provider = MockProvider::from_file(Path::new("/nonexistent/mock.toml"));
        let request = ChatRequest::builder().add_message(ChatMessage::user("hi")).build();
        assert!(provider.complete(request).await.is_err());
    }
}
