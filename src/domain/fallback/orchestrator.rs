//! Client-side provider rotation with a bounded retry budget

use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;
use tracing::{info, warn};

use super::GatewayClient;
use crate::domain::chat::{ChatRequest, ChatResult};
use crate::domain::knowledge::PROFILE;
use crate::domain::llm::Message;
use crate::domain::{DomainError, ProviderId};

/// Additional attempts after the first one
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-facing message once every provider in the rotation has failed
pub fn remediation_message() -> String {
    format!(
        "All LLM providers failed. Please try again later or contact me directly at {}",
        PROFILE.email
    )
}

/// Why a single attempt did not produce an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    pub provider: ProviderId,
    pub reason: String,
}

#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The gateway rejected the request itself; rotating would not help
    #[error("{message}")]
    Rejected {
        provider: ProviderId,
        message: String,
    },

    /// Every attempt in the retry budget failed
    #[error("{message}")]
    Exhausted {
        failures: Vec<AttemptFailure>,
        message: String,
    },
}

/// A successful delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub provider: ProviderId,
    pub content: String,
    pub attempts: u32,
}

/// Rotation position for one send; never outlives it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryState {
    index: usize,
    attempt: u32,
}

impl RetryState {
    pub fn new(start: ProviderId) -> Self {
        Self {
            index: start.index(),
            attempt: 0,
        }
    }

    pub fn provider(&self) -> ProviderId {
        ProviderId::from_index(self.index)
    }

    /// Zero-based number of the current attempt
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn can_retry(&self, max_retries: u32) -> bool {
        self.attempt < max_retries
    }

    /// Move to the next provider in the rotation
    pub fn advance(&mut self) -> ProviderId {
        self.index = (self.index + 1) % ProviderId::ALL.len();
        self.attempt += 1;
        self.provider()
    }
}

/// Sends a prompt through the gateway, rotating providers on
/// fallback-eligible failures.
pub struct FallbackOrchestrator<G: GatewayClient> {
    client: G,
    max_retries: u32,
    attempt_timeout: Duration,
}

impl<G: GatewayClient> std::fmt::Debug for FallbackOrchestrator<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackOrchestrator")
            .field("max_retries", &self.max_retries)
            .field("attempt_timeout", &self.attempt_timeout)
            .finish()
    }
}

impl<G: GatewayClient> FallbackOrchestrator<G> {
    pub fn new(client: G) -> Self {
        Self {
            client,
            max_retries: DEFAULT_MAX_RETRIES,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    /// Values above [`DEFAULT_MAX_RETRIES`] are clamped to it
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.min(DEFAULT_MAX_RETRIES);
        self
    }

    pub fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Deliver `[system, user]` starting at `start`.
    ///
    /// At most `max_retries + 1` attempts are made. Terminal gateway errors
    /// stop the loop immediately.
    pub async fn deliver(
        &self,
        start: ProviderId,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<Delivery, OrchestratorError> {
        let messages = vec![Message::system(system_prompt), Message::user(user_message)];
        let mut state = RetryState::new(start);
        let mut failures = Vec::new();

        loop {
            let provider = state.provider();
            let request = ChatRequest::new(provider, messages.clone());

            match self.attempt(&request).await {
                Ok(ChatResult::Success {
                    provider, content, ..
                }) => {
                    return Ok(Delivery {
                        provider,
                        content,
                        attempts: state.attempt() + 1,
                    });
                }
                Ok(result) if result.should_fallback() => {
                    let reason = result.error().unwrap_or_default().to_string();
                    warn!(provider = %provider, reason = %reason, "Provider failed");
                    failures.push(AttemptFailure { provider, reason });
                }
                Ok(ChatResult::Failure { error, .. }) => {
                    warn!(provider = %provider, error = %error, "Gateway rejected request");
                    return Err(OrchestratorError::Rejected {
                        provider,
                        message: error,
                    });
                }
                Err(e) => {
                    warn!(provider = %provider, error = %e, "Gateway call failed");
                    failures.push(AttemptFailure {
                        provider,
                        reason: e.to_string(),
                    });
                }
            }

            if !state.can_retry(self.max_retries) {
                break;
            }

            let next = state.advance();
            info!(from = %provider, to = %next, "Falling back to next provider");
        }

        warn!(attempts = failures.len(), "All providers failed");

        Err(OrchestratorError::Exhausted {
            failures,
            message: remediation_message(),
        })
    }

    async fn attempt(&self, request: &ChatRequest) -> Result<ChatResult, DomainError> {
        match timeout(self.attempt_timeout, self.client.send(request)).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::timeout(
                "gateway",
                self.attempt_timeout.as_millis() as u64,
            )),
        }
    }
}
