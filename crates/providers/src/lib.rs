pub mod adapter;
pub mod health;
pub mod mock;
pub mod prompts;
pub mod retry;
pub mod types;

pub use adapter::{GroqProvider, Provider, ProviderFactory};
pub use health::{HealthCheckResult, ProviderHealthChecker};
pub use mock::{MockProvider, MockResponse};
pub use prompts::system_prompt;
pub use retry::{RetryConfig, is_retryable_error};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};

pub use siaga_core::{Error, Result};
