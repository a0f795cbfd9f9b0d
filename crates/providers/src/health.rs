use crate::Provider;
use crate::types::{ChatMessage, ChatRequest};
use std::time::{Duration, Instant};
use siaga_core::Result;

/// Health check result
#[derive(Debug, Clone)]
pub struct HealthCheckResult {
    pub healthy: bool,
    pub latency_ms: u64,
    pub error: Option<String>,
}

impl HealthCheckResult {
    pub fn healthy(latency_ms: u64) -> Self {
        Self { healthy: true, latency_ms, error: None }
    }

    pub fn unhealthy(error: String) -> Self {
        Self { healthy: false, latency_ms: 0, error: Some(error) }
    }
}

/// Health checker for any provider.
///
/// Issues one minimal completion request with a deadline and reports
/// reachability plus round-trip latency.
pub struct ProviderHealthChecker {
    provider: std::sync::Arc<dyn Provider>,
    timeout: Duration,
}

impl ProviderHealthChecker {
    pub fn new(provider: std::sync::Arc<dyn Provider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Probe the provider once
    pub async fn check(&self) -> Result<HealthCheckResult> {
        let request = ChatRequest::builder()
            .add_message(ChatMessage::user("ping"))
            .max_tokens(1)
            .build();

        let start = Instant::now();
        let outcome = tokio::time::timeout(self.timeout, self.provider.complete(request)).await;

        let result = match outcome {
            Ok(Ok(_)) => HealthCheckResult::healthy(start.elapsed().as_millis() as u64),
            Ok(Err(e)) => HealthCheckResult::unhealthy(e.to_string()),
            Err(_) => HealthCheckResult::unhealthy(format!("timed out after {:?}", self.timeout)),
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockProvider, MockResponse};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_check_healthy() {
        let provider = Arc::new(MockProvider::with_reply("pong"));
        let checker = ProviderHealthChecker::new(provider, Duration::from_secs(5));

        let result = checker.check().await.unwrap();
        assert!(result.healthy);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_health_check_unhealthy() {
        let provider = Arc::new(MockProvider::new(vec![MockResponse::Failure {
            message: "endpoint unreachable".to_string(),
        }]));
        let checker = ProviderHealthChecker::new(provider, Duration::from_secs(5));

        let result = checker.check().await.unwrap();
        assert!(!result.healthy);
        assert!(result.error.unwrap().contains("endpoint unreachable"));
    }

    #[test]
    fn test_health_check_result_constructors() {
        let ok = HealthCheckResult::healthy(42);
        assert!(ok.healthy);
        assert_eq!(ok.latency_ms, 42);

        let bad = HealthCheckResult::unhealthy("down".to_string());
        assert!(!bad.healthy);
        assert_eq!(bad.error.as_deref(), Some("down"));
    }
}
