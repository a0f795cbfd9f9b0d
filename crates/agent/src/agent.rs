use std::sync::Arc;

use siaga_core::logging::truncate_for_log;
use siaga_core::{Error, ProviderSettings, emergency_response, is_emergency_keyword};
use siaga_providers::{ChatMessage, ChatRequest, Provider, RetryConfig, is_retryable_error, system_prompt};

/// Canned reply when the provider reports quota exhaustion (HTTP 429)
pub const RATE_LIMIT_REPLY: &str = "Maaf, terlalu banyak permintaan. Silakan coba lagi dalam beberapa saat.";

/// Canned reply when the provider rejects the credentials (HTTP 401/403)
pub const AUTH_REPLY: &str = "Terjadi masalah dengan autentikasi API. Silakan hubungi administrator.";

/// Canned reply for every other failure, pointing at the emergency hotlines
pub const FALLBACK_REPLY: &str = "Maaf, terjadi kesalahan dalam memproses permintaan Anda. Dalam keadaan darurat, \
segera hubungi layanan darurat di nomor 115 (Basarnas) atau 117 (BNPB).";

/// Sampling parameters forwarded with every request
#[derive(Debug, Clone, Copy)]
pub struct RequestParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self { temperature: 0.7, max_tokens: 1024, top_p: 0.9 }
    }
}

impl From<&ProviderSettings> for RequestParams {
    fn from(settings: &ProviderSettings) -> Self {
        Self { temperature: settings.temperature, max_tokens: settings.max_tokens, top_p: settings.top_p }
    }
}

/// The conversation-owning assistant.
///
/// Holds the append-only transcript for the process lifetime (seeded with
/// one system entry, never persisted) and forwards the whole transcript to
/// the provider on every turn. Failures never escape [`Assistant::send`]:
/// every error degrades to a returned user-displayable string, so callers
/// need no error branch for network trouble.
pub struct Assistant {
    provider: Arc<dyn Provider>,
    transcript: Vec<ChatMessage>,
    params: RequestParams,
    retry: RetryConfig,
}

impl Assistant {
    pub fn new(provider: Arc<dyn Provider>, params: RequestParams) -> Self {
        Self {
            provider,
            transcript: vec![ChatMessage::system(system_prompt())],
            params,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Send one user message and return the assistant reply.
    ///
    /// Emergency phrases short-circuit the network entirely: the canned
    /// instruction template is appended as the assistant turn and returned
    /// at once. Otherwise the user entry is appended, the full transcript
    /// goes to the provider (retrying only transport-level failures), and
    /// the reply is appended on success. On failure the transcript keeps
    /// the user entry and the canned reply is returned without being
    /// recorded.
    pub async fn send(&mut self, user_text: &str) -> String {
        if is_emergency_keyword(user_text) {
            tracing::info!("emergency phrase detected, replying with canned instructions");
            self.transcript.push(ChatMessage::user(user_text));
            let reply = emergency_response().to_string();
            self.transcript.push(ChatMessage::assistant(reply.clone()));
            return reply;
        }

        self.transcript.push(ChatMessage::user(user_text));

        match self.complete_with_retry().await {
            Ok(reply) => {
                tracing::debug!(reply = %truncate_for_log(&reply, 200), "assistant reply received");
                self.transcript.push(ChatMessage::assistant(reply.clone()));
                reply
            }
            Err(Error::RateLimited(detail)) => {
                tracing::warn!(%detail, "provider rate limited");
                RATE_LIMIT_REPLY.to_string()
            }
            Err(Error::Unauthorized(detail)) => {
                tracing::error!(%detail, "provider rejected credentials");
                AUTH_REPLY.to_string()
            }
            Err(e) => {
                tracing::error!(error = %e, "completion request failed");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Issue the completion, retrying transport-level failures only
    async fn complete_with_retry(&self) -> siaga_core::Result<String> {
        let request = ChatRequest::builder()
            .messages(self.transcript.clone())
            .temperature(self.params.temperature)
            .max_tokens(self.params.max_tokens)
            .top_p(self.params.top_p)
            .build();

        let mut attempt = 0;
        loop {
            match self.provider.complete(request.clone()).await {
                Ok(response) => return Ok(response.message.content),
                Err(e) if is_retryable_error(&e) && self.retry.should_retry(attempt + 1) => {
                    let delay = self.retry.delay_for_attempt(attempt + 1);
                    tracing::warn!(error = %e, attempt, ?delay, "retrying completion request");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Reset the conversation back to the system seed
    pub fn reset(&mut self) {
        self.transcript.truncate(1);
    }

    /// The full transcript, system seed included
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Number of user/assistant turns recorded (system seed excluded)
    pub fn turn_count(&self) -> usize {
        self.transcript.len().saturating_sub(1)
    }
}
