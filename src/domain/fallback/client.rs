use async_trait::async_trait;

use crate::domain::chat::{ChatRequest, ChatResult};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Transport to the gateway handler, as seen from the client side
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GatewayClient: Send + Sync {
    /// Deliver one request.
    ///
    /// `Ok` carries any recognizable gateway answer, including failures the
    /// gateway reported itself. `Err` means no usable answer arrived: network
    /// error, non-JSON body, or a non-2xx status without a gateway error body.
    async fn send(&self, request: &ChatRequest) -> Result<ChatResult, DomainError>;
}
