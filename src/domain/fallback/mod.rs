//! Client-side fallback across providers

mod client;
mod orchestrator;

pub use client::GatewayClient;
pub use orchestrator::{
    AttemptFailure, DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_MAX_RETRIES, Delivery, FallbackOrchestrator,
    OrchestratorError, RetryState, remediation_message,
};

#[cfg(test)]
pub use client::MockGatewayClient;
